//! A small driver that walks each component through its paces and prints the results.

use dsa_toolkit::algorithms::search::{binary_search, find_first, find_last, search_rotated};
use dsa_toolkit::algorithms::sort::merge_sort;
use dsa_toolkit::collections::adapters::{Queue, Stack};
use dsa_toolkit::collections::contiguous::DynArray;
use dsa_toolkit::collections::graph::Graph;
use dsa_toolkit::collections::linked::SinglyLinkedList;

fn main() {
    println!("[DynArray]\n");

    let mut arr = DynArray::new();
    for fruit in ["Apple", "Banana", "Cherry", "Date", "Elderberry"] {
        arr.push(fruit);
    }
    println!("After five pushes: {arr} (len {}, cap {})", arr.len(), arr.cap());

    arr.insert(2, "Coconut");
    println!("Inserted at 2:     {arr}");
    arr.remove(1);
    arr.remove_value(&"Date");
    println!("After removals:    {arr}");

    println!("\n[SinglyLinkedList]\n");

    let mut list: SinglyLinkedList<_> = (1..=5).map(|i| i * 10).collect();
    println!("{}", list.to_visual_string());
    list.reverse();
    println!("{}", list.to_visual_string());
    list.push_front(0);
    list.pop_back();
    println!("{}", list.to_visual_string());

    println!("\n[Stack]\n");

    let mut stack: Stack<_> = ["First", "Second", "Third"].into_iter().collect();
    println!("{}", stack.to_visual_string());
    println!("Distance of \"First\" from the top: {:?}", stack.search(&"First"));
    while let Ok(value) = stack.try_pop() {
        println!("Popped {value}");
    }

    println!("\n[Queue]\n");

    let mut queue = Queue::new();
    for customer in ["Alice", "Bob", "Charlie"] {
        queue.enqueue(customer);
    }
    println!("{}", queue.to_visual_string());
    println!("Serving {}", queue.dequeue());
    queue.enqueue("Diana");
    println!("{}", queue.to_visual_string());

    println!("\n[Graph]\n");

    let mut graph = Graph::new();
    for [u, v] in [[1, 2], [1, 3], [2, 4], [3, 4], [4, 5]] {
        graph.add_edge(u, v);
    }
    println!("{}", graph.to_visual_string());
    println!("BFS from 1: {}", graph.bfs(1));
    println!("DFS from 1: {}", graph.dfs(1));

    println!("\n[Search and Sort]\n");

    let mut unsorted = [5, 2, 9, 1, 5, 6];
    merge_sort(&mut unsorted);
    println!("Sorted: {unsorted:?}");

    let sorted = [1, 3, 5, 7, 9, 11, 13, 15, 17, 19, 21, 23, 25];
    println!("Index of 7: {:?}", binary_search(&sorted, &7));

    let duplicates = [1, 2, 2, 2, 3, 4, 4, 5, 5, 5, 5, 6];
    println!(
        "Run of 5s: {:?} to {:?}",
        find_first(&duplicates, &5),
        find_last(&duplicates, &5)
    );

    let rotated = [7, 8, 9, 1, 2, 3, 4, 5, 6];
    println!("Index of 5 in the rotated array: {:?}", search_rotated(&rotated, &5));
}

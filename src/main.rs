use basic_containers::ContainerError;
use basic_containers::collections::contiguous::{Array, Scalar};
use basic_containers::collections::linked::LinkedList;
use basic_containers::collections::traits::SortOrder;

fn main() -> Result<(), ContainerError> {
    println!("\n[Array]\n");

    let arr = Array::from_fn(10, |i| i as i64);
    let squares = arr.try_mul(&arr)?;
    println!("{squares}");
    squares.print(2, 5)?;

    let mut shifted = &squares - Scalar(40);
    shifted.sort(SortOrder::Descending);
    println!("{shifted:?}");

    println!("\n[LinkedList]\n");

    let mut list = LinkedList::new();
    list.try_add(0, 3)?;
    list.try_add(0, 1)?;
    list.try_add(1, 2)?;
    list.print();

    let mut other: LinkedList<i32> = [9, 2, 7].into_iter().collect();
    list.try_merge(1, &mut other)?;
    list.print();

    list.sort();
    list.print();
    println!("2 found at {}", list.search(&2));

    list.reverse();
    println!("{:?}", list);
    println!("removed {}", list.try_rm(0)?);

    Ok(())
}

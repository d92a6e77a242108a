use narwhal::data::heap::MinHeap;

#[test]
fn pops_in_ascending_key_order() {
    let mut h = MinHeap::with_capacity(5);
    h.push(0, 40);
    h.push(1, 10);
    h.push(2, 30);
    h.push(3, 20);
    h.push(4, 50);

    let keys: Vec<u64> = std::iter::from_fn(|| h.pop()).map(|(_, k)| k).collect();
    assert_eq!(keys, vec![10, 20, 30, 40, 50]);
    assert!(h.is_empty());
}

#[test]
fn decrease_key_repositions_an_entry() {
    let mut h = MinHeap::with_capacity(3);
    h.push(0, 10);
    h.push(1, 20);
    h.push(2, 30);

    h.decrease_key(2, 5);
    assert_eq!(h.pop(), Some((2, 5)));
    assert_eq!(h.pop(), Some((0, 10)));
    assert_eq!(h.pop(), Some((1, 20)));
}

#[test]
fn decrease_key_ignores_non_decreasing_updates() {
    let mut h = MinHeap::with_capacity(2);
    h.push(0, 10);
    h.push(1, 20);

    h.decrease_key(1, 20);
    h.decrease_key(1, 25);
    assert_eq!(h.pop(), Some((0, 10)));
    assert_eq!(h.pop(), Some((1, 20)));
}

#[test]
fn contains_tracks_membership_across_pops() {
    let mut h = MinHeap::with_capacity(2);
    h.push(0, 2);
    h.push(1, 1);

    assert!(h.contains(0));
    assert!(h.contains(1));
    assert_eq!(h.len(), 2);

    assert_eq!(h.pop(), Some((1, 1)));
    assert!(!h.contains(1));
    assert!(h.contains(0));

    assert_eq!(h.pop(), Some((0, 2)));
    assert!(!h.contains(0));
    assert_eq!(h.pop(), None);
}

#[test]
fn decrease_key_on_a_popped_id_is_a_no_op() {
    let mut h = MinHeap::with_capacity(2);
    h.push(0, 1);
    h.push(1, 2);
    assert_eq!(h.pop(), Some((0, 1)));

    h.decrease_key(0, 0);
    assert!(!h.contains(0));
    assert_eq!(h.pop(), Some((1, 2)));
}

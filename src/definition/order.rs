/// Anything that carries an optional display order.
pub trait Orderable {
    fn order(&self) -> Option<i32>;
}

/// Sorts by ascending order. Unordered entries go last and ties keep their
/// original relative position.
pub fn sort_by_order<T: Orderable>(items: &mut [T]) {
    items.sort_by_key(|item| match item.order() {
        Some(order) => (0, order),
        None => (1, 0),
    });
}

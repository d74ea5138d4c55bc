use crate::operator::Operator;
use crate::traverse::Traverse;

/// Extension trait adding the three folding modes to every traversable source
pub trait ReduceExt: Traverse {
    /// Fold with a binary operator, seeding with the first element
    ///
    /// Each later element is combined as `operator.apply(element, accumulator)`.
    /// Returns `None` for an empty source.
    fn reduce_with<O>(&self, operator: O) -> Option<Self::Element>
    where
        Self::Element: Clone,
        O: Operator<Self::Element>,
    {
        let mut acc: Option<Self::Element> = None;
        self.traverse(|e| {
            acc = Some(match acc.take() {
                None => e.clone(),
                Some(prev) => operator.apply(e.clone(), prev),
            });
        });
        acc
    }

    /// Fold with `f(accumulator, element)`, seeding with the first element
    ///
    /// Returns `None` for an empty source.
    fn reduce<F>(&self, mut f: F) -> Option<Self::Element>
    where
        Self::Element: Clone,
        F: FnMut(Self::Element, &Self::Element) -> Self::Element,
    {
        let mut acc: Option<Self::Element> = None;
        self.traverse(|e| {
            acc = Some(match acc.take() {
                None => e.clone(),
                Some(prev) => f(prev, e),
            });
        });
        acc
    }

    /// Fold every element into `seed` with `f(accumulator, element)`
    ///
    /// The seed is always the starting accumulator, whatever its value, and
    /// is returned unchanged for an empty source.
    fn reduce_from<A, F>(&self, seed: A, mut f: F) -> A
    where
        F: FnMut(A, &Self::Element) -> A,
    {
        let mut acc = Some(seed);
        self.traverse(|e| {
            acc = acc.take().map(|prev| f(prev, e));
        });
        // The slot is only empty while `f` runs, so a panic in `f` is the one
        // way to leave it empty, and that unwinds past this line.
        acc.unwrap_or_else(|| unreachable!("accumulator is refilled on every visit"))
    }
}

impl<S: Traverse + ?Sized> ReduceExt for S {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BinaryOp, Concat, Max, SortedList};

    fn sample() -> SortedList<i32> {
        SortedList::new() << 3 << 13 << 42 << 4 << 7
    }

    #[test]
    fn test_reduce_with_add() {
        assert_eq!(sample().reduce_with(BinaryOp::Add), Some(69));
    }

    #[test]
    fn test_reduce_with_parsed_operator() {
        let op: BinaryOp = "*".parse().unwrap();
        let list = SortedList::new() << 2 << 3 << 4;
        assert_eq!(list.reduce_with(op), Some(24));
    }

    #[test]
    fn test_reduce_with_sub_uses_element_as_left_operand() {
        // 3, then 4 - 3 = 1, then 7 - 1 = 6
        let list = SortedList::new() << 3 << 4 << 7;
        assert_eq!(list.reduce_with(BinaryOp::Sub), Some(6));
    }

    #[test]
    fn test_reduce_with_max() {
        assert_eq!(sample().reduce_with(BinaryOp::Max), Some(42));
        assert_eq!(sample().reduce_with(BinaryOp::Min), Some(3));
    }

    #[test]
    fn test_reduce_with_on_strings() {
        let words = SortedList::new() << "b".to_string() << "c".to_string() << "a".to_string();
        // "a", then "b" + "a", then "c" + "ba"
        assert_eq!(words.reduce_with(Concat), Some("cba".to_string()));
        assert_eq!(words.reduce_with(Max), Some("c".to_string()));
    }

    #[test]
    fn test_reduce_with_closure() {
        assert_eq!(sample().reduce(|s, e| s + e), Some(69));
    }

    #[test]
    fn test_reduce_from_seed() {
        assert_eq!(sample().reduce_from(-10, |s, e| s + e), 59);
    }

    #[test]
    fn test_reduce_from_zero_seed_is_not_unset() {
        let list = SortedList::new() << 2 << 3;
        assert_eq!(list.reduce_from(0, |s, e| s * e), 0);
    }

    #[test]
    fn test_reduce_from_changes_type() {
        let joined = sample().reduce_from(String::new(), |mut s, e| {
            if !s.is_empty() {
                s.push(',');
            }
            s.push_str(&e.to_string());
            s
        });
        assert_eq!(joined, "3,4,7,13,42");
    }

    #[test]
    fn test_reduce_empty_source() {
        let list: SortedList<i32> = SortedList::new();
        assert_eq!(list.reduce_with(BinaryOp::Add), None);
        assert_eq!(list.reduce(|s, e| s + e), None);
        assert_eq!(list.reduce_from(7, |s, e| s + e), 7);
    }

    #[test]
    fn test_reduce_single_element() {
        let list = SortedList::new() << 5;
        assert_eq!(list.reduce(|_, _| unreachable!()), Some(5));
    }
}

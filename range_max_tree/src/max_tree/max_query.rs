use super::{NegativeInfinity, Query};

#[derive(Debug, Clone, Copy)]
pub struct MaxQuery;

impl<V: Copy + NegativeInfinity + Ord> Query<V> for MaxQuery {
    fn identity() -> V {
        V::negative_infinity()
    }
    fn combine(left: V, right: V) -> V {
        left.max(right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_ignores_argument_order() {
        let values = [i32::MIN, -4, 0, 9, i32::MAX];
        for &a in &values {
            for &b in &values {
                assert_eq!(MaxQuery::combine(a, b), MaxQuery::combine(b, a));
                assert_eq!(MaxQuery::combine(a, b), a.max(b));
            }
        }
    }

    #[test]
    fn identity_never_wins() {
        let identity: i64 = MaxQuery::identity();
        assert_eq!(MaxQuery::combine(identity, i64::MIN), i64::MIN);
        assert_eq!(MaxQuery::combine(-3, identity), -3);
    }
}

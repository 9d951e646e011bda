use crate::Error;
use log::error;
use std::ops::RangeInclusive;

/// check that a batch of issued identifiers holds no duplicates and no gaps
///
/// sorts `ids` in place and returns the range they cover
pub fn check_contiguous(ids: &mut [u64]) -> Result<RangeInclusive<u64>, Error> {
    ids.sort_unstable();

    let (first, last) = match ids {
        [] => {
            error!("no identifiers to check");
            return Err(Error::Empty);
        }
        [first, .., last] => (*first, *last),
        [only] => (*only, *only),
    };

    for pair in ids.windows(2) {
        let (after, next) = (pair[0], pair[1]);
        if after == next {
            error!("identifier {after} was handed out more than once");
            return Err(Error::DuplicateIdentifier(after));
        }
        if next - after > 1 {
            error!("identifiers jump from {after} to {next}");
            return Err(Error::Gap { after, next });
        }
    }

    Ok(first..=last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shuffled_batch_is_accepted() {
        let mut ids = vec![7, 3, 5, 4, 6];
        assert_eq!(check_contiguous(&mut ids).unwrap(), 3..=7);
        assert_eq!(ids, [3, 4, 5, 6, 7]);
    }

    #[test]
    fn single_identifier() {
        assert_eq!(check_contiguous(&mut [u64::MAX]).unwrap(), u64::MAX..=u64::MAX);
    }

    #[test]
    fn empty_batch_is_rejected() {
        assert!(matches!(check_contiguous(&mut []), Err(Error::Empty)));
    }

    #[test]
    fn duplicate_is_reported() {
        let res = check_contiguous(&mut [2, 1, 2, 3]);
        assert!(matches!(res, Err(Error::DuplicateIdentifier(2))));
    }

    #[test]
    fn gap_is_reported() {
        let res = check_contiguous(&mut [10, 11, 14]);
        assert!(matches!(res, Err(Error::Gap { after: 11, next: 14 })));
    }
}

//! Month grid caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use tracing::debug;

use crate::error::CalendarError;
use crate::gregorian::GregorianDate;
use crate::grid::MonthGrid;

type GridKey = (i32, u32, Option<GregorianDate>);

/// Global cache for built month grids.
static CACHE: Mutex<Option<LruCache<GridKey, MonthGrid>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(size) => size,
    None => unreachable!(),
};

/// Get or build a month grid, using the cache.
pub fn month_grid(
    year: i32,
    month: u32,
    today: Option<GregorianDate>,
) -> Result<MonthGrid, CalendarError> {
    let mut cache_guard = CACHE.lock().unwrap_or_else(PoisonError::into_inner);

    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    let key = (year, month, today);
    if let Some(grid) = cache.get(&key) {
        return Ok(grid.clone());
    }

    debug!(year, month, "month grid cache miss");
    let grid = MonthGrid::build(year, month, today)?;
    cache.put(key, grid.clone());
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_grid_matches_fresh_build() {
        let today = GregorianDate::new(2025, 3, 1).ok();
        let first = month_grid(2025, 3, today).unwrap();
        let second = month_grid(2025, 3, today).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, MonthGrid::build(2025, 3, today).unwrap());
    }

    #[test]
    fn test_errors_are_not_cached() {
        assert!(month_grid(2025, 0, None).is_err());
        assert!(month_grid(2025, 0, None).is_err());
    }
}

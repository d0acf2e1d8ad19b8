//! Windowed pagination math.
//!
//! Provides a reusable page-window calculator that turns a record count,
//! page size, and neighbor radius into the compact sequence of page
//! tokens a navigation strip renders: page numbers around the current
//! page, the first and last page, and gap markers where pages are
//! elided.

use serde::Serialize;

/// A single entry in a rendered pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageToken {
    /// A concrete, clickable page number (1-based).
    Page(usize),
    /// Elided pages between the first page and the window.
    LeftGap,
    /// Elided pages between the window and the last page.
    RightGap,
}

/// Total number of pages needed for `total_records` at `page_size`
/// records per page. Zero when either input is zero.
pub fn total_pages(total_records: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total_records.div_ceil(page_size)
    }
}

/// Compute the page-window token sequence.
///
/// Pure function of its inputs. `current_page` is 1-based and assumed
/// to come from a previous window's tokens; out-of-range values still
/// produce a well-formed sequence, just not a useful one.
///
/// The window shows `neighbor_radius` pages on each side of the current
/// page, plus the first and last page. When everything fits without
/// eliding (`total_pages <= 2*neighbor_radius + 5`), the full
/// contiguous range is returned and no gap markers appear.
///
/// An empty list still renders a single page 1, so the degenerate
/// zero-page case returns `[Page(1)]` rather than an empty sequence.
pub fn page_window(
    total_records: usize,
    page_size: usize,
    neighbor_radius: usize,
    current_page: usize,
) -> Vec<PageToken> {
    let total_pages = total_pages(total_records, page_size);
    if total_pages <= 1 {
        return vec![PageToken::Page(1)];
    }

    // Current page + neighbors on both sides + first and last page,
    // then two extra block slots for the gap markers.
    let total_numbers = 2 * neighbor_radius + 3;
    let total_blocks = total_numbers + 2;

    if total_pages <= total_blocks {
        return (1..=total_pages).map(PageToken::Page).collect();
    }

    let start_page = current_page.saturating_sub(neighbor_radius).max(2);
    let end_page = (current_page + neighbor_radius).min(total_pages - 1);
    let core_len = (start_page..=end_page).count();

    let has_left_gap = start_page > 2;
    let has_right_gap = total_pages - end_page > 1;
    let spill_offset = total_numbers - (core_len + 1);

    let mut tokens = Vec::with_capacity(total_blocks);
    tokens.push(PageToken::Page(1));

    if has_left_gap && !has_right_gap {
        // The window is flush against the last page: spend the unused
        // slot budget on literal page numbers instead of a left gap.
        tokens.extend((start_page - spill_offset..start_page).map(PageToken::Page));
        tokens.extend((start_page..=end_page).map(PageToken::Page));
    } else {
        // Both gaps present, or the window sits near the first page;
        // either way the strip keeps both markers around the core.
        tokens.push(PageToken::LeftGap);
        tokens.extend((start_page..=end_page).map(PageToken::Page));
        tokens.push(PageToken::RightGap);
    }

    tokens.push(PageToken::Page(total_pages));
    tokens
}

/// Resolve the page a token navigates to when activated.
///
/// Numeric tokens go to their own page. Gap tokens jump by a fixed
/// offset derived from the neighbor radius (`2r - 1` pages back,
/// `2r + 3` pages forward) rather than to a page adjacent to the
/// elided range. This is a deliberately coarse "jump near the edge of
/// the window" heuristic carried over from the navigation control's
/// original behavior; keep the formula as-is.
pub fn gap_jump(token: PageToken, neighbor_radius: usize, current_page: usize) -> usize {
    match token {
        PageToken::Page(n) => n,
        PageToken::LeftGap => {
            let back = (2 * neighbor_radius).saturating_sub(1);
            current_page.saturating_sub(back).max(1)
        }
        PageToken::RightGap => current_page + 2 * neighbor_radius + 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(window: &[PageToken]) -> Vec<usize> {
        window
            .iter()
            .filter_map(|t| match t {
                PageToken::Page(n) => Some(*n),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_empty_list_renders_single_page() {
        assert_eq!(page_window(0, 5, 2, 1), vec![PageToken::Page(1)]);
    }

    #[test]
    fn test_single_page() {
        assert_eq!(page_window(4, 5, 2, 1), vec![PageToken::Page(1)]);
    }

    #[test]
    fn test_zero_page_size_renders_single_page() {
        assert_eq!(page_window(50, 0, 2, 1), vec![PageToken::Page(1)]);
    }

    #[test]
    fn test_contiguous_range_when_everything_fits() {
        // 45 records / 5 per page = 9 pages = total_blocks for radius 2,
        // so no gaps regardless of the current page.
        for current in [1, 5, 9, 42] {
            let window = page_window(45, 5, 2, current);
            let expect: Vec<PageToken> = (1..=9).map(PageToken::Page).collect();
            assert_eq!(window, expect, "current page {current}");
        }
    }

    #[test]
    fn test_both_gaps_around_centered_window() {
        let window = page_window(50, 5, 2, 5);
        assert_eq!(
            window,
            vec![
                PageToken::Page(1),
                PageToken::LeftGap,
                PageToken::Page(3),
                PageToken::Page(4),
                PageToken::Page(5),
                PageToken::Page(6),
                PageToken::Page(7),
                PageToken::RightGap,
                PageToken::Page(10),
            ]
        );
    }

    #[test]
    fn test_near_start_keeps_gap_markers() {
        // No pages are actually elided on the left, but the strip still
        // shows both markers for any window that is not flush-right.
        let window = page_window(50, 5, 2, 1);
        assert_eq!(
            window,
            vec![
                PageToken::Page(1),
                PageToken::LeftGap,
                PageToken::Page(2),
                PageToken::Page(3),
                PageToken::RightGap,
                PageToken::Page(10),
            ]
        );
    }

    #[test]
    fn test_flush_right_spills_literal_pages() {
        let window = page_window(50, 5, 2, 9);
        assert_eq!(
            pages(&window),
            vec![1, 4, 5, 6, 7, 8, 9, 10],
            "right-flush window fills the budget with numbers"
        );
        assert!(!window.contains(&PageToken::LeftGap));
        assert!(!window.contains(&PageToken::RightGap));
    }

    #[test]
    fn test_window_starts_and_ends_with_bounds() {
        for current in 1..=20 {
            let window = page_window(100, 5, 2, current);
            assert_eq!(window.first(), Some(&PageToken::Page(1)));
            assert_eq!(window.last(), Some(&PageToken::Page(20)));
        }
    }

    #[test]
    fn test_identical_inputs_identical_output() {
        assert_eq!(page_window(73, 5, 1, 8), page_window(73, 5, 1, 8));
    }

    #[test]
    fn test_gap_jump_offsets() {
        assert_eq!(gap_jump(PageToken::Page(7), 2, 5), 7);
        // Left gap: 2*2 - 1 = 3 pages back, floored at page 1.
        assert_eq!(gap_jump(PageToken::LeftGap, 2, 5), 2);
        assert_eq!(gap_jump(PageToken::LeftGap, 2, 2), 1);
        // Right gap: 2*2 + 3 = 7 pages forward.
        assert_eq!(gap_jump(PageToken::RightGap, 2, 5), 12);
    }
}

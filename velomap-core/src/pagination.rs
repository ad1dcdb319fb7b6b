//! Compact page-link strips for pagination controls.
//!
//! Long page lists collapse into the first page, the last page, the current
//! page with its siblings, and ellipses where pages were skipped.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Number of pages shown either side of the current page by default.
pub const DEFAULT_SIBLING_COUNT: usize = 1;

/// One entry of a pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum PageLink {
    /// Link to a 1-based page number.
    Page(usize),
    /// Placeholder for a run of skipped pages.
    Ellipsis,
}

/// Build the pagination strip for `current_page` out of `total_pages`.
///
/// # Examples
/// ```
/// use velomap_core::{PageLink, page_range};
///
/// let links = page_range(5, 10, 1);
/// assert_eq!(
///     links,
///     [
///         PageLink::Page(1),
///         PageLink::Ellipsis,
///         PageLink::Page(4),
///         PageLink::Page(5),
///         PageLink::Page(6),
///         PageLink::Ellipsis,
///         PageLink::Page(10),
///     ]
/// );
/// ```
#[must_use]
pub fn page_range(current_page: usize, total_pages: usize, sibling_count: usize) -> Vec<PageLink> {
    // first, last, current and two ellipses
    let visible_slots = sibling_count.saturating_add(5);
    // pages in the run shown next to a single ellipsis
    let edge_run = sibling_count.saturating_mul(2).saturating_add(3);
    if visible_slots >= total_pages || edge_run.saturating_add(1) >= total_pages {
        return pages(1, total_pages).collect();
    }

    let left_sibling = current_page.saturating_sub(sibling_count).max(1);
    let right_sibling = current_page.saturating_add(sibling_count).min(total_pages);
    let show_left_dots = left_sibling > 2;
    let show_right_dots = right_sibling < total_pages.saturating_sub(1);

    match (show_left_dots, show_right_dots) {
        (false, true) => pages(1, edge_run)
            .chain([PageLink::Ellipsis, PageLink::Page(total_pages)])
            .collect(),
        (true, false) => [PageLink::Page(1), PageLink::Ellipsis]
            .into_iter()
            .chain(pages(total_pages - edge_run + 1, total_pages))
            .collect(),
        (true, true) => [PageLink::Page(1), PageLink::Ellipsis]
            .into_iter()
            .chain(pages(left_sibling, right_sibling))
            .chain([PageLink::Ellipsis, PageLink::Page(total_pages)])
            .collect(),
        (false, false) => pages(1, total_pages).collect(),
    }
}

fn pages(first: usize, last: usize) -> impl Iterator<Item = PageLink> {
    (first..=last).map(PageLink::Page)
}

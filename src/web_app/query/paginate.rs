// web_app/query/paginate.rs - Third pipeline stage and page navigation helpers

/// Products shown per page
pub const PAGE_SIZE: usize = 12;

/// Up to this many pages every page number is listed
pub const MAX_LISTED_PAGES: u32 = 5;

/// Entry in the pagination bar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageSlot {
    Page(u32),
    Ellipsis,
}

/// `ceil(count / PAGE_SIZE)`, never less than 1 so "page 1 of 1" stays valid
pub fn total_pages(count: usize) -> u32 {
    let pages = count.div_ceil(PAGE_SIZE).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

pub fn clamp_page(page: u32, total_pages: u32) -> u32 {
    page.clamp(1, total_pages.max(1))
}

/// Items of the 1-based `page`: the half-open range `[(page-1)*12, page*12)`
pub fn paginate<T>(items: &[T], page: u32) -> &[T] {
    let page = page.max(1) as usize;
    let start = (page - 1).saturating_mul(PAGE_SIZE).min(items.len());
    let end = page.saturating_mul(PAGE_SIZE).min(items.len());
    &items[start..end]
}

/// Page numbers to render around the current page.
///
/// With more than five pages: the first page, a window of up to three pages
/// around the current one kept inside `2..=total-1`, the last page, and an
/// ellipsis wherever pages are skipped.
pub fn page_slots(current: u32, total: u32) -> Vec<PageSlot> {
    if total <= MAX_LISTED_PAGES {
        return (1..=total.max(1)).map(PageSlot::Page).collect();
    }

    let mut start = current.saturating_sub(1).max(2);
    let mut end = current.saturating_add(1).min(total - 1);
    if current <= 2 {
        end = 4;
    }
    if current >= total - 1 {
        start = total - 3;
    }

    let mut slots = vec![PageSlot::Page(1)];
    if start > 2 {
        slots.push(PageSlot::Ellipsis);
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < total - 1 {
        slots.push(PageSlot::Ellipsis);
    }
    slots.push(PageSlot::Page(total));
    slots
}

pub const PAGE_SIZE: usize = 12;

/// Pages shown on each side of the current one before collapsing into "...".
const NEIGHBORHOOD: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    Page { number: usize, current: bool },
    Ellipsis,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageWindow {
    pub controls: Vec<PageControl>,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

impl PageWindow {
    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Pages are 1-based. Anything outside the valid range resets to 1.
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    let pages = page_count(total, page_size);
    if page >= 1 && page <= pages {
        page
    } else {
        1
    }
}

pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page = clamp_page(page, items.len(), page_size);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    items.get(start..end).unwrap_or(&[])
}

/// Numbered controls around `current`, always including the first and last
/// page. Returns an empty window when everything fits on one page.
pub fn page_window(current: usize, total_pages: usize) -> PageWindow {
    if total_pages <= 1 {
        return PageWindow::default();
    }

    let mut controls = Vec::new();
    for i in 1..=total_pages {
        let near = i + NEIGHBORHOOD >= current && i <= current + NEIGHBORHOOD;
        if i == 1 || i == total_pages || near {
            controls.push(PageControl::Page {
                number: i,
                current: i == current,
            });
        } else if i + NEIGHBORHOOD + 1 == current || i == current + NEIGHBORHOOD + 1 {
            controls.push(PageControl::Ellipsis);
        }
    }

    PageWindow {
        controls,
        prev: (current > 1).then(|| current - 1),
        next: (current < total_pages).then(|| current + 1),
    }
}

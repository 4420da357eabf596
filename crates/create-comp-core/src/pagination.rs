//! Pagination window for long choice lists
//!
//! The window keeps the active item visible. With looping on, the list
//! scrolls like an endless ring: the cursor row drifts down to the middle
//! of the page and then stays put while items move under it. Without
//! looping, the window clamps to the ends of the list.

/// Remembers where the cursor row sat on the previous render
#[derive(Debug, Default, Clone)]
pub struct Paginator {
    position: usize,
    last_active: usize,
}

impl Paginator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the visible window, one line per item.
    ///
    /// `render` receives `(item, index, is_active)` with `index` into the full list.
    pub fn paginate<T, F>(
        &mut self,
        items: &[T],
        active: usize,
        page_size: usize,
        looping: bool,
        mut render: F,
    ) -> Vec<String>
    where
        F: FnMut(&T, usize, bool) -> String,
    {
        let total = items.len();
        if total == 0 {
            return Vec::new();
        }
        let page_size = page_size.max(1);
        let active = active.min(total - 1);

        let position = if looping {
            self.ring_position(active, total, page_size)
        } else {
            clamped_position(active, total, page_size)
        };
        self.position = position;
        self.last_active = active;

        // position <= active whenever the list is longer than a page; for short
        // lists position == active, so the window starts at 0 either way.
        let start = (active + total - position % total) % total;

        (0..page_size.min(total))
            .map(|offset| {
                let index = (start + offset) % total;
                render(&items[index], index, index == active)
            })
            .collect()
    }

    fn ring_position(&self, active: usize, total: usize, page_size: usize) -> usize {
        if total <= page_size {
            return active;
        }
        // Only drift the cursor row when moving down within one page
        if self.last_active < active && active - self.last_active < page_size {
            return (page_size / 2).min(self.position + active - self.last_active);
        }
        self.position
    }
}

fn clamped_position(active: usize, total: usize, page_size: usize) -> usize {
    let middle = page_size / 2;
    if total <= page_size || active < middle {
        active
    } else if active >= total - middle {
        active + page_size - total
    } else {
        middle
    }
}

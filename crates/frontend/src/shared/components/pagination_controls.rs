use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page numbers shown around the current one.
const WINDOW: usize = 5;

/// 0-indexed pages to render as number buttons, centred on `current` where possible.
pub fn page_window(current: usize, total: usize, width: usize) -> Vec<usize> {
    if total == 0 || width == 0 {
        return Vec::new();
    }
    let width = width.min(total);
    let start = current
        .saturating_sub(width / 2)
        .min(total - width);
    (start..start + width).collect()
}

/// First / prev / page numbers / next / last, plus a `page / total (count)` label.
#[component]
pub fn PaginationControls(
    /// Current page (0-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    /// Rows across all pages
    #[prop(into)]
    total_count: Signal<usize>,

    on_page_change: Callback<usize>,
) -> impl IntoView {
    let at_first = move || current_page.get() == 0;
    let at_last = move || current_page.get() + 1 >= total_pages.get();
    let go = move |page: usize| {
        if page != current_page.get_untracked() && page < total_pages.get_untracked() {
            on_page_change.run(page);
        }
    };

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <div class="pagination-controls">
                <button class="pagination-btn" on:click=move |_| go(0) disabled=at_first title="最初のページ">
                    {icon("chevrons-left")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| go(current_page.get_untracked().saturating_sub(1))
                    disabled=at_first
                    title="前へ"
                >
                    {icon("chevron-left")}
                </button>
                {move || {
                    page_window(current_page.get(), total_pages.get(), WINDOW)
                        .into_iter()
                        .map(|page| view! {
                            <button
                                class="pagination-btn"
                                class:pagination-btn--active=move || current_page.get() == page
                                on:click=move |_| go(page)
                            >
                                {page + 1}
                            </button>
                        })
                        .collect_view()
                }}
                <button
                    class="pagination-btn"
                    on:click=move |_| go(current_page.get_untracked() + 1)
                    disabled=at_last
                    title="次へ"
                >
                    {icon("chevron-right")}
                </button>
                <button
                    class="pagination-btn"
                    on:click=move |_| go(total_pages.get_untracked().saturating_sub(1))
                    disabled=at_last
                    title="最後のページ"
                >
                    {icon("chevrons-right")}
                </button>
                <span class="pagination-info">
                    {move || format!(
                        "{} / {} ({}件)",
                        current_page.get() + 1,
                        total_pages.get().max(1),
                        total_count.get()
                    )}
                </span>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(0, 3, 5), vec![0, 1, 2]);
        assert_eq!(page_window(0, 10, 5), vec![0, 1, 2, 3, 4]);
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(9, 10, 5), vec![5, 6, 7, 8, 9]);
        assert!(page_window(0, 0, 5).is_empty());
    }
}

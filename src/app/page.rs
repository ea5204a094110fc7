use crate::app::view::{Element, Node};
use crate::core::state::UiState;

pub const SEARCH_INPUT_ID: &str = "searchInput";
pub const SEARCH_BUTTON_ID: &str = "searchBtn";
pub const LOADING_ID: &str = "loadingIndicator";
pub const ERROR_CONTAINER_ID: &str = "errorContainer";
pub const ERROR_MESSAGE_ID: &str = "errorMessage";
pub const DISPLAY_ID: &str = "pokemonDisplay";
pub const THEME_TOGGLE_ID: &str = "darkModeToggle";
pub const THEME_ICON_ID: &str = "themeIcon";

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// 由目前狀態建立整個頁面
pub fn render_page(state: &UiState) -> Node {
    let mut root = Element::new("html").attr("lang", "en");
    if state.theme.is_dark() {
        root.add_class("dark");
    }

    root.child(head())
        .child(
            Element::new("body")
                .class("min-h-screen bg-slate-50 dark:bg-slate-900 transition-colors")
                .child(header(state))
                .child(
                    Element::new("main")
                        .class("max-w-md mx-auto p-6 flex flex-col gap-6")
                        .child(search_bar(state))
                        .child(loading(state))
                        .child(error_panel(state))
                        .child(display(state)),
                ),
        )
        .into()
}

fn head() -> Element {
    Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(Element::new("title").text("Pokédex Lookup"))
        .child(Element::new("script").attr("src", TAILWIND_CDN))
}

fn header(state: &UiState) -> Element {
    Element::new("header")
        .class("flex justify-between items-center max-w-md mx-auto p-6")
        .child(
            Element::new("h1")
                .class("text-2xl font-black text-slate-800 dark:text-white")
                .text("Pokédex"),
        )
        .child(
            Element::new("button")
                .id(THEME_TOGGLE_ID)
                .attr("type", "button")
                .class("p-2 rounded-full bg-slate-200 dark:bg-slate-700")
                .child(
                    Element::new("span")
                        .id(THEME_ICON_ID)
                        .text(state.theme.icon()),
                ),
        )
}

fn search_bar(state: &UiState) -> Element {
    let mut button = Element::new("button")
        .id(SEARCH_BUTTON_ID)
        .attr("type", "button")
        .class("px-6 py-3 rounded-2xl bg-red-500 text-white font-bold disabled:opacity-50")
        .text("Search");
    if state.trigger_disabled {
        button.set_attr("disabled", "");
    }

    Element::new("div")
        .class("flex gap-2")
        .child(
            Element::new("input")
                .id(SEARCH_INPUT_ID)
                .attr("type", "text")
                .attr("placeholder", "Name or ID")
                .attr("value", state.input.as_str())
                .class("flex-1 px-4 py-3 rounded-2xl border border-slate-200 dark:bg-slate-800 dark:text-white"),
        )
        .child(button)
}

fn loading(state: &UiState) -> Element {
    Element::new("div")
        .id(LOADING_ID)
        .class("text-center text-slate-500 animate-pulse")
        .hidden(!state.loading_visible)
        .text("Loading...")
}

fn error_panel(state: &UiState) -> Element {
    Element::new("div")
        .id(ERROR_CONTAINER_ID)
        .class("p-4 rounded-2xl bg-red-50 dark:bg-red-900/30 text-red-700 dark:text-red-300")
        .hidden(state.error.is_none())
        .child(
            Element::new("p")
                .id(ERROR_MESSAGE_ID)
                .text(state.error.clone().unwrap_or_default()),
        )
}

fn display(state: &UiState) -> Element {
    Element::new("div")
        .id(DISPLAY_ID)
        .class("p-6 rounded-3xl bg-white dark:bg-slate-800 shadow-xl")
        .hidden(state.result.is_none())
        .children(state.result.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::theme::Theme;

    #[test]
    fn test_idle_page_hides_panels() {
        let page = render_page(&UiState::new(Theme::Light));

        assert!(page.find_by_id(LOADING_ID).unwrap().is_hidden());
        assert!(page.find_by_id(ERROR_CONTAINER_ID).unwrap().is_hidden());
        assert!(page.find_by_id(DISPLAY_ID).unwrap().is_hidden());
        assert!(!page.find_by_id(SEARCH_BUTTON_ID).unwrap().has_attr("disabled"));
        assert_eq!(page.find_by_id(THEME_ICON_ID).unwrap().text_content(), "🌙");
        assert!(!page.as_element().unwrap().has_class("dark"));
    }

    #[test]
    fn test_loading_page() {
        let state = UiState {
            input: "pikachu".to_string(),
            trigger_disabled: true,
            loading_visible: true,
            ..UiState::new(Theme::Dark)
        };
        let page = render_page(&state);

        assert!(!page.find_by_id(LOADING_ID).unwrap().is_hidden());
        assert!(page.find_by_id(SEARCH_BUTTON_ID).unwrap().has_attr("disabled"));
        assert_eq!(
            page.find_by_id(SEARCH_INPUT_ID).unwrap().get_attr("value"),
            Some("pikachu")
        );
        assert!(page.as_element().unwrap().has_class("dark"));
        assert_eq!(page.find_by_id(THEME_ICON_ID).unwrap().text_content(), "☀️");
    }

    #[test]
    fn test_error_page() {
        let state = UiState {
            error: Some("boom".to_string()),
            ..UiState::default()
        };
        let page = render_page(&state);

        assert!(!page.find_by_id(ERROR_CONTAINER_ID).unwrap().is_hidden());
        assert_eq!(page.find_by_id(ERROR_MESSAGE_ID).unwrap().text_content(), "boom");
        assert!(page.find_by_id(DISPLAY_ID).unwrap().is_hidden());
    }
}

use crate::app::card::{display_name, render_card};
use crate::app::theme::Theme;
use crate::core::query::normalize_query;
use crate::core::state::UiState;
use crate::domain::model::LookupResult;
use crate::domain::ports::LookupSource;
use crate::utils::error::{ErrorCategory, Result, NETWORK_MESSAGE, NOT_FOUND_MESSAGE};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// 已送出、尚未完成的查詢；不借用引擎，可以丟到別的 task 去等
pub type PendingLookup = Pin<Box<dyn Future<Output = Result<LookupResult>> + Send + 'static>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    SearchButton,
    ThemeToggle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// 輸入框內容變更
    Input(String),
    Click(Control),
    /// 輸入框有焦點時的按鍵
    KeyPress(Key),
}

/// 使用者看得到的兩種失敗
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    Network,
}

impl FailureKind {
    pub fn message(self) -> &'static str {
        match self {
            FailureKind::NotFound => NOT_FOUND_MESSAGE,
            FailureKind::Network => NETWORK_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// 查詢字串為空，什麼都沒做
    Skipped,
    /// 已有查詢進行中，按鈕是停用狀態
    Busy,
    Rendered { id: u32, name: String },
    Failed(FailureKind),
}

pub struct LookupEngine<S: LookupSource> {
    source: Arc<S>,
    state: UiState,
    in_flight: Option<String>,
}

impl<S: LookupSource + 'static> LookupEngine<S> {
    pub fn new(source: S, theme: Theme) -> Self {
        Self::with_shared_source(Arc::new(source), theme)
    }

    pub fn with_shared_source(source: Arc<S>, theme: Theme) -> Self {
        Self {
            source,
            state: UiState::new(theme),
            in_flight: None,
        }
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn in_flight(&self) -> Option<&str> {
        self.in_flight.as_deref()
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.state.input = value.into();
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.state.theme = self.state.theme.toggled();
        tracing::debug!("Theme switched to {}", self.state.theme);
        self.state.theme
    }

    /// 進入 Loading：停用按鈕、顯示讀取中、清掉上一次的結果與錯誤。
    /// 查詢為空或按鈕停用中時回傳 None，狀態完全不變。
    pub fn begin_search(&mut self) -> Option<PendingLookup> {
        if self.state.trigger_disabled {
            tracing::warn!("Search ignored: a lookup is already in progress");
            return None;
        }

        let query = match normalize_query(&self.state.input) {
            Some(query) => query,
            None => {
                tracing::debug!("Empty query, nothing to search");
                return None;
            }
        };

        tracing::info!("🔍 Looking up '{}'", query);

        self.state.trigger_disabled = true;
        self.state.loading_visible = true;
        self.state.error = None;
        self.state.result = None;
        self.in_flight = Some(query.clone());

        let source = Arc::clone(&self.source);
        Some(Box::pin(async move { source.lookup(&query).await }))
    }

    /// 回到 Idle；不論成功失敗都會重新啟用按鈕並隱藏讀取中
    pub fn complete_search(&mut self, result: Result<LookupResult>) -> SearchOutcome {
        let query = self.in_flight.take().unwrap_or_default();

        let outcome = match result {
            Ok(data) => {
                tracing::info!("✅ Found #{} {} for '{}'", data.id, data.name, query);
                self.state.result = Some(render_card(&data));
                SearchOutcome::Rendered {
                    id: data.id,
                    name: display_name(&data.name),
                }
            }
            Err(e) => {
                let kind = match e.category() {
                    ErrorCategory::NotFound => FailureKind::NotFound,
                    _ => FailureKind::Network,
                };
                tracing::warn!("❌ Lookup for '{}' failed: {} ({:?})", query, e, kind);
                self.state.error = Some(kind.message().to_string());
                self.state.result = None;
                SearchOutcome::Failed(kind)
            }
        };

        self.state.trigger_disabled = false;
        self.state.loading_visible = false;

        outcome
    }

    /// 一次完成整個查詢流程
    pub async fn search(&mut self) -> SearchOutcome {
        if self.state.trigger_disabled {
            return SearchOutcome::Busy;
        }

        match self.begin_search() {
            Some(pending) => {
                let result = pending.await;
                self.complete_search(result)
            }
            None => SearchOutcome::Skipped,
        }
    }

    /// 處理一個 UI 事件；若因此送出查詢，回傳待完成的查詢
    pub fn dispatch(&mut self, event: UiEvent) -> Option<PendingLookup> {
        match event {
            UiEvent::Input(value) => {
                self.set_input(value);
                None
            }
            UiEvent::Click(Control::ThemeToggle) => {
                self.toggle_theme();
                None
            }
            UiEvent::Click(Control::SearchButton) | UiEvent::KeyPress(Key::Enter) => {
                self.begin_search()
            }
            UiEvent::KeyPress(Key::Other) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::card::TYPES_CONTAINER_ID;
    use crate::app::view::Node;
    use crate::core::state::Phase;
    use crate::domain::model::{NamedResource, Sprites, TypeSlot};
    use crate::utils::error::LookupError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Clone, Copy)]
    enum Reply {
        Found,
        Missing,
        Down,
    }

    struct MockSource {
        reply: Reply,
        calls: AtomicUsize,
        queries: std::sync::Mutex<Vec<String>>,
    }

    impl MockSource {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                calls: AtomicUsize::new(0),
                queries: std::sync::Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    fn pikachu() -> LookupResult {
        LookupResult {
            name: "pikachu".to_string(),
            id: 25,
            height: 4,
            weight: 60,
            sprites: Sprites {
                front_default: Some("https://img/25.png".to_string()),
                ..Sprites::default()
            },
            types: vec![TypeSlot {
                slot: 1,
                kind: NamedResource {
                    name: "electric".to_string(),
                    url: String::new(),
                },
            }],
            base_experience: Some(112),
        }
    }

    #[async_trait::async_trait]
    impl LookupSource for MockSource {
        async fn lookup(&self, query: &str) -> Result<LookupResult> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.queries.lock().unwrap().push(query.to_string());
            match self.reply {
                Reply::Found => Ok(pikachu()),
                Reply::Missing => Err(LookupError::NotFound {
                    query: query.to_string(),
                }),
                Reply::Down => Err(LookupError::HttpStatus { status: 503 }),
            }
        }
    }

    fn engine(reply: Reply) -> (LookupEngine<MockSource>, Arc<MockSource>) {
        let source = Arc::new(MockSource::new(reply));
        (
            LookupEngine::with_shared_source(Arc::clone(&source), Theme::Light),
            source,
        )
    }

    fn assert_idle(state: &UiState) {
        assert!(!state.trigger_disabled);
        assert!(!state.loading_visible);
    }

    #[tokio::test]
    async fn test_successful_search_renders_card() {
        let (mut engine, source) = engine(Reply::Found);
        engine.set_input("  PIKACHU ");

        let outcome = engine.search().await;

        assert_eq!(
            outcome,
            SearchOutcome::Rendered {
                id: 25,
                name: "Pikachu".to_string()
            }
        );
        assert_eq!(source.queries.lock().unwrap().as_slice(), ["pikachu"]);

        let state = engine.state();
        assert_idle(state);
        assert!(state.error.is_none());

        let card: Node = state.result.clone().unwrap().into();
        assert_eq!(card.find_by_id("pokemonId").unwrap().text_content(), "#025");
        assert_eq!(card.find_by_id(TYPES_CONTAINER_ID).unwrap().element_children().count(), 1);
    }

    #[tokio::test]
    async fn test_empty_query_is_a_no_op() {
        let (mut engine, source) = engine(Reply::Found);
        engine.set_input("pikachu");
        engine.search().await;
        let before = engine.state().clone();

        engine.set_input("   ");
        let expected = UiState {
            input: "   ".to_string(),
            ..before
        };

        assert_eq!(engine.search().await, SearchOutcome::Skipped);
        assert_eq!(source.calls(), 1);
        assert_eq!(engine.state(), &expected);
    }

    #[tokio::test]
    async fn test_not_found_shows_message_and_hides_result() {
        let (mut engine, _source) = engine(Reply::Missing);
        engine.set_input("missingno");

        assert_eq!(engine.search().await, SearchOutcome::Failed(FailureKind::NotFound));

        let state = engine.state();
        assert_idle(state);
        assert_eq!(state.error.as_deref(), Some(NOT_FOUND_MESSAGE));
        assert!(!state.result_visible());
    }

    #[tokio::test]
    async fn test_other_failures_show_network_message() {
        let (mut engine, _source) = engine(Reply::Down);
        engine.set_input("pikachu");

        assert_eq!(engine.search().await, SearchOutcome::Failed(FailureKind::Network));

        let state = engine.state();
        assert_idle(state);
        assert_eq!(state.error.as_deref(), Some(NETWORK_MESSAGE));
    }

    #[tokio::test]
    async fn test_begin_clears_previous_output_and_blocks_retrigger() {
        let (mut engine, source) = engine(Reply::Found);
        engine.set_input("pikachu");
        engine.search().await;
        assert!(engine.state().result_visible());

        let pending = engine.dispatch(UiEvent::KeyPress(Key::Enter)).unwrap();
        {
            let state = engine.state();
            assert!(state.trigger_disabled);
            assert!(state.loading_visible);
            assert_eq!(state.phase(), Phase::Loading);
            assert!(!state.result_visible());
            assert!(!state.error_visible());
        }
        assert_eq!(engine.in_flight(), Some("pikachu"));

        // 停用中再按一次不會送出第二個請求
        assert!(engine.dispatch(UiEvent::Click(Control::SearchButton)).is_none());
        assert_eq!(engine.search().await, SearchOutcome::Busy);

        let result = pending.await;
        engine.complete_search(result);

        assert_eq!(source.calls(), 2);
        assert_idle(engine.state());
        assert_eq!(engine.state().phase(), Phase::Idle);
        assert!(engine.in_flight().is_none());
    }

    #[tokio::test]
    async fn test_error_then_success_clears_error() {
        let (mut engine, _source) = engine(Reply::Found);
        engine.set_input("pikachu");
        let pending = engine.begin_search().unwrap();
        drop(pending);
        engine.complete_search(Err(LookupError::HttpStatus { status: 500 }));
        assert!(engine.state().error_visible());

        engine.search().await;
        assert!(!engine.state().error_visible());
        assert!(engine.state().result_visible());
    }

    #[test]
    fn test_dispatch_input_and_theme() {
        let (mut engine, source) = engine(Reply::Found);

        assert!(engine.dispatch(UiEvent::Input("eevee".to_string())).is_none());
        assert!(engine.dispatch(UiEvent::KeyPress(Key::Other)).is_none());
        assert_eq!(engine.state().input, "eevee");

        let icon = engine.state().theme.icon();
        engine.dispatch(UiEvent::Click(Control::ThemeToggle));
        assert!(engine.state().theme.is_dark());
        engine.dispatch(UiEvent::Click(Control::ThemeToggle));
        assert_eq!(engine.state().theme.icon(), icon);

        assert_eq!(source.calls(), 0);
    }
}

use crate::app::html::to_document;
use crate::app::page::render_page;
use crate::app::text::to_text;
use crate::core::engine::{Control, Key, LookupEngine, SearchOutcome, UiEvent};
use crate::domain::model::LookupResult;
use crate::domain::ports::{LookupSource, PageStore};
use crate::utils::error::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;

pub const HELP: &str = "\
Type a Pokémon name or ID and press Enter to search.
  :search   search again with the current input
  :theme    toggle light/dark theme
  :help     show this help
  :quit     exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 一般輸入：寫入輸入框並按 Enter
    Lookup(String),
    Search,
    Theme,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_line(line: &str) -> Command {
    let trimmed = line.trim();
    if !trimmed.starts_with(':') {
        return Command::Lookup(line.to_string());
    }

    match trimmed {
        ":search" | ":s" => Command::Search,
        ":theme" | ":t" => Command::Theme,
        ":help" | ":h" | ":?" => Command::Help,
        ":quit" | ":q" | ":exit" => Command::Quit,
        other => Command::Unknown(other.to_string()),
    }
}

/// 終端機互動介面：把輸入行轉成 UI 事件，並在每次變化後輸出頁面
pub struct Session<S: LookupSource, P: PageStore> {
    engine: LookupEngine<S>,
    store: Option<P>,
}

impl<S: LookupSource + 'static, P: PageStore> Session<S, P> {
    pub fn new(engine: LookupEngine<S>, store: Option<P>) -> Self {
        Self { engine, store }
    }

    pub fn engine(&self) -> &LookupEngine<S> {
        &self.engine
    }

    /// 輸出目前頁面；快照寫入失敗只記錄警告
    pub async fn present<W: AsyncWrite + Unpin>(&self, out: &mut W) -> Result<()> {
        let page = render_page(self.engine.state());

        out.write_all(to_text(&page).as_bytes()).await?;
        out.write_all(b"\n\n").await?;
        out.flush().await?;

        if let Some(store) = &self.store {
            if let Err(e) = store.write_page(&to_document(&page)).await {
                tracing::warn!("⚠️ Failed to write page snapshot: {}", e);
            }
        }

        Ok(())
    }

    /// 單次查詢後輸出頁面
    pub async fn run_once<W: AsyncWrite + Unpin>(
        &mut self,
        query: &str,
        out: &mut W,
    ) -> Result<SearchOutcome> {
        self.engine.dispatch(UiEvent::Input(query.to_string()));
        let outcome = self.engine.search().await;
        self.present(out).await?;
        Ok(outcome)
    }

    /// 事件迴圈。查詢在另一個 task 執行，結果經由 channel 回來，
    /// 期間仍可切換主題；輸入結束後會等進行中的查詢完成再返回。
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let (tx, mut rx) = mpsc::channel::<Result<LookupResult>>(1);
        let mut lines = input.lines();
        let mut input_open = true;

        self.present(out).await?;

        loop {
            let waiting = self.engine.in_flight().is_some();
            if !input_open && !waiting {
                break;
            }

            tokio::select! {
                Some(result) = rx.recv(), if waiting => {
                    let outcome = self.engine.complete_search(result);
                    tracing::debug!("Lookup finished: {:?}", outcome);
                    self.present(out).await?;
                }
                line = lines.next_line(), if input_open => {
                    let Some(line) = line? else {
                        input_open = false;
                        continue;
                    };

                    match parse_line(&line) {
                        Command::Quit => break,
                        Command::Help => {
                            out.write_all(HELP.as_bytes()).await?;
                            out.write_all(b"\n\n").await?;
                            out.flush().await?;
                        }
                        Command::Theme => {
                            self.engine.dispatch(UiEvent::Click(Control::ThemeToggle));
                            self.present(out).await?;
                        }
                        Command::Search => {
                            self.submit(UiEvent::Click(Control::SearchButton), &tx, out).await?;
                        }
                        Command::Lookup(text) => {
                            self.engine.dispatch(UiEvent::Input(text));
                            self.submit(UiEvent::KeyPress(Key::Enter), &tx, out).await?;
                        }
                        Command::Unknown(command) => {
                            let message = format!("Unknown command '{}', try :help\n\n", command);
                            out.write_all(message.as_bytes()).await?;
                            out.flush().await?;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    async fn submit<W: AsyncWrite + Unpin>(
        &mut self,
        event: UiEvent,
        tx: &mpsc::Sender<Result<LookupResult>>,
        out: &mut W,
    ) -> Result<()> {
        if self.engine.state().trigger_disabled {
            self.engine.dispatch(event);
            out.write_all(b"A search is already in progress, please wait.\n\n")
                .await?;
            out.flush().await?;
            return Ok(());
        }

        if let Some(pending) = self.engine.dispatch(event) {
            let tx = tx.clone();
            tokio::spawn(async move {
                let _ = tx.send(pending.await).await;
            });
            self.present(out).await?;
        }

        Ok(())
    }
}

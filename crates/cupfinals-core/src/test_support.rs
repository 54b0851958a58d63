//! In-memory page driver, confirmer and sink for flow tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use cupfinals_protocols::{
    Confirmer, DriverError, FinalResult, PageDriver, ResultSink, RowField, UserChoice,
};

use crate::locators::Locators;

pub(crate) const SOURCE: &str = "https://en.wikipedia.org/wiki/List_of_FIFA_World_Cup_finals";

#[derive(Debug, Default)]
pub(crate) struct DriverState {
    pub url: String,
    pub texts: HashMap<String, String>,
    pub titles: VecDeque<String>,
    pub navigations: Vec<String>,
    pub text_reads: Vec<String>,
    pub quit_calls: u32,
    pub fail_current_url: bool,
    pub fail_title: bool,
    /// Contents of the file behind each `file://` navigation, read at navigation time.
    pub opened_pages: Vec<String>,
}

/// Page driver backed by a map of XPath to visible text.
#[derive(Debug, Default)]
pub(crate) struct FakeDriver {
    pub state: Mutex<DriverState>,
}

impl FakeDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// A driver whose table holds `rows` complete finals.
    pub fn with_rows(rows: u32) -> Self {
        let driver = Self::new();
        driver.show_table();
        for row in 1..=rows {
            driver.set_row(
                row,
                &(1926 + 4 * row).to_string(),
                &format!("Winner {row}"),
                &format!("{row}–0"),
                &format!("Runner {row}"),
            );
        }
        driver
    }

    pub fn show_table(&self) {
        self.set_text(Locators::default().table(), "");
    }

    pub fn set_row(&self, row: u32, year: &str, winner: &str, score: &str, runner_up: &str) {
        let locators = Locators::default();
        for (field, text) in [
            (RowField::Year, year),
            (RowField::Winner, winner),
            (RowField::Score, score),
            (RowField::RunnerUp, runner_up),
        ] {
            self.set_text(&locators.xpath(field, row), text);
        }
    }

    pub fn set_text(&self, xpath: &str, text: &str) {
        self.state
            .lock()
            .unwrap()
            .texts
            .insert(xpath.to_string(), text.to_string());
    }

    pub fn remove_text(&self, xpath: &str) {
        self.state.lock().unwrap().texts.remove(xpath);
    }

    pub fn push_titles(&self, titles: &[&str]) {
        let mut state = self.state.lock().unwrap();
        state.titles.extend(titles.iter().map(|t| t.to_string()));
    }

    pub fn set_url(&self, url: &str) {
        self.state.lock().unwrap().url = url.to_string();
    }

    pub fn navigations(&self) -> Vec<String> {
        self.state.lock().unwrap().navigations.clone()
    }

    pub fn text_reads(&self) -> Vec<String> {
        self.state.lock().unwrap().text_reads.clone()
    }

    pub fn quit_calls(&self) -> u32 {
        self.state.lock().unwrap().quit_calls
    }

    pub fn opened_pages(&self) -> Vec<String> {
        self.state.lock().unwrap().opened_pages.clone()
    }
}

#[async_trait]
impl PageDriver for FakeDriver {
    async fn navigate(&self, url: &str) -> Result<(), DriverError> {
        let mut state = self.state.lock().unwrap();
        if let Some(path) = url::Url::parse(url)
            .ok()
            .filter(|u| u.scheme() == "file")
            .and_then(|u| u.to_file_path().ok())
        {
            let html = std::fs::read_to_string(path)
                .map_err(|e| DriverError::Navigation(e.to_string()))?;
            state.opened_pages.push(html);
        }
        state.navigations.push(url.to_string());
        state.url = url.to_string();
        Ok(())
    }

    async fn current_url(&self) -> Result<String, DriverError> {
        let state = self.state.lock().unwrap();
        if state.fail_current_url {
            return Err(DriverError::NotConnected);
        }
        Ok(state.url.clone())
    }

    async fn title(&self) -> Result<String, DriverError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_title {
            return Err(DriverError::Script("title unavailable".to_string()));
        }
        Ok(state
            .titles
            .pop_front()
            .unwrap_or_else(|| "User Confirmation".to_string()))
    }

    async fn wait_visible(&self, xpath: &str, _timeout: Duration) -> Result<(), DriverError> {
        let state = self.state.lock().unwrap();
        if state.texts.contains_key(xpath) {
            Ok(())
        } else {
            Err(DriverError::Timeout(format!("element {xpath}")))
        }
    }

    async fn visible_text(&self, xpath: &str, _timeout: Duration) -> Result<String, DriverError> {
        let mut state = self.state.lock().unwrap();
        state.text_reads.push(xpath.to_string());
        state
            .texts
            .get(xpath)
            .cloned()
            .ok_or_else(|| DriverError::Timeout(format!("element {xpath}")))
    }

    async fn quit(&self) -> Result<(), DriverError> {
        self.state.lock().unwrap().quit_calls += 1;
        Ok(())
    }
}

/// Confirmer answering from a script, then skipping.
///
/// When built with a driver it moves that driver off the source page, the way
/// the real confirmation page does.
#[derive(Default)]
pub(crate) struct ScriptedConfirmer {
    choices: Mutex<VecDeque<UserChoice>>,
    pub seen: Mutex<Vec<FinalResult>>,
    driver: Option<Arc<FakeDriver>>,
}

impl ScriptedConfirmer {
    pub fn new(choices: &[UserChoice]) -> Self {
        Self {
            choices: Mutex::new(choices.iter().copied().collect()),
            ..Default::default()
        }
    }

    pub fn leaving_page(mut self, driver: Arc<FakeDriver>) -> Self {
        self.driver = Some(driver);
        self
    }

    pub fn seen_years(&self) -> Vec<i32> {
        self.seen.lock().unwrap().iter().map(|r| r.year()).collect()
    }
}

#[async_trait]
impl Confirmer for ScriptedConfirmer {
    async fn confirm(&self, result: &FinalResult) -> UserChoice {
        self.seen.lock().unwrap().push(result.clone());
        if let Some(driver) = &self.driver {
            driver.set_url("file:///tmp/user_choice_fifa_test.html");
        }
        self.choices
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(UserChoice::Skip)
            .effective()
    }
}

/// Sink recording every batch it receives.
#[derive(Default)]
pub(crate) struct RecordingSink {
    pub batches: Mutex<Vec<Vec<FinalResult>>>,
    pub fail: bool,
}

impl RecordingSink {
    pub fn calls(&self) -> usize {
        self.batches.lock().unwrap().len()
    }

    pub fn written_years(&self) -> Vec<i32> {
        self.batches
            .lock()
            .unwrap()
            .iter()
            .flatten()
            .map(|r| r.year())
            .collect()
    }
}

#[async_trait]
impl ResultSink for RecordingSink {
    async fn append_results(&self, results: &[FinalResult]) -> bool {
        self.batches.lock().unwrap().push(results.to_vec());
        !self.fail
    }
}

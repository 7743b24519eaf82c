//! Shared helpers for controller tests

use crate::state::AppState;
use crate::store::Store;
use async_trait::async_trait;
use proofline_client::{
    ClientError, CorrectionReport, CorrectionService, FileCorrection, Metrics, Suggestion,
};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use std::time::Duration;

const FIXES: &[(&str, &str, &[&str])] = &[
    ("has", "have", &["have", "had", "hash"]),
    ("teh", "the", &["the", "ten", "tea"]),
];

/// In-memory correction service
///
/// Fixes the words listed in `FIXES`, records every call and optionally
/// delays correct calls by the queued latencies (in call order).
#[derive(Default)]
pub struct MockService {
    texts: Mutex<Vec<String>>,
    words: Mutex<Vec<String>>,
    uploads: Mutex<Vec<String>>,
    latencies: Mutex<VecDeque<Duration>>,
    failing: AtomicBool,
}

impl MockService {
    pub fn with_latencies(latencies: impl IntoIterator<Item = Duration>) -> Self {
        Self {
            latencies: Mutex::new(latencies.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of service calls of any kind
    pub fn calls(&self) -> usize {
        self.texts.lock().unwrap().len()
            + self.words.lock().unwrap().len()
            + self.uploads.lock().unwrap().len()
    }

    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }

    pub fn words(&self) -> Vec<String> {
        self.words.lock().unwrap().clone()
    }

    pub fn uploads(&self) -> Vec<String> {
        self.uploads.lock().unwrap().clone()
    }

    fn check_failing(&self) -> Result<(), ClientError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ClientError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

fn fix(text: &str) -> (String, Vec<Suggestion>) {
    let mut suggestions = Vec::new();
    let corrected: Vec<&str> = text
        .split(' ')
        .map(|word| match FIXES.iter().find(|(from, _, _)| *from == word) {
            Some((from, to, candidates)) => {
                suggestions.push(Suggestion {
                    from: from.to_string(),
                    to: to.to_string(),
                    candidates: candidates.iter().map(|c| c.to_string()).collect(),
                    index: None,
                });
                *to
            }
            None => word,
        })
        .collect();
    (corrected.join(" "), suggestions)
}

fn metrics(text: &str) -> Metrics {
    Metrics {
        words: Some(text.split_whitespace().count() as u64),
        sentences: Some(1),
        chars: Some(text.chars().count() as u64),
    }
}

#[async_trait]
impl CorrectionService for MockService {
    async fn correct(&self, text: &str) -> Result<CorrectionReport, ClientError> {
        self.texts.lock().unwrap().push(text.to_string());
        let latency = self.latencies.lock().unwrap().pop_front();
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        self.check_failing()?;

        let (corrected, suggestions) = fix(text);
        Ok(CorrectionReport {
            original: text.to_string(),
            corrected,
            suggestions,
            metrics: metrics(text),
            grammar_score: Some(95.0),
            readability: Default::default(),
        })
    }

    async fn add_word(&self, word: &str) -> Result<String, ClientError> {
        self.words.lock().unwrap().push(word.to_string());
        self.check_failing()?;

        if word.chars().all(char::is_alphabetic) {
            Ok(word.to_lowercase())
        } else {
            Err(ClientError::Service(
                "Please provide a single alphabetic word.".to_string(),
            ))
        }
    }

    async fn correct_file(
        &self,
        file_name: &str,
        content: Vec<u8>,
    ) -> Result<FileCorrection, ClientError> {
        self.uploads.lock().unwrap().push(file_name.to_string());
        self.check_failing()?;

        let text = String::from_utf8_lossy(&content);
        let (corrected, mut suggestions) = fix(&text);
        for suggestion in &mut suggestions {
            suggestion.candidates.clear();
        }
        Ok(FileCorrection {
            corrected,
            suggestions,
            metrics: metrics(&text),
            grammar_score: Some(95.0),
            readability: Default::default(),
        })
    }
}

/// Let spawned tasks run and apply whatever they dispatched
///
/// Does not advance time, so it is safe inside paused-time tests.
pub async fn settle(store: &mut Store) {
    for _ in 0..5 {
        tokio::task::yield_now().await;
        store.process_pending();
    }
}

/// Keep settling until `done` holds, giving blocking file I/O real time
/// to finish
pub async fn settle_until(store: &mut Store, done: impl Fn(&AppState) -> bool) {
    for _ in 0..200 {
        settle(store).await;
        if done(store.state()) {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("condition not reached");
}

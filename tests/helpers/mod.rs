#![allow(dead_code)]

use async_trait::async_trait;
use ops_whisperer::app::App;
use ops_whisperer::generator::{Generator, GeneratorError, GeneratorInvoker, RawResponse};
use ops_whisperer::shell::ShellExecutor;
use ops_whisperer::ui::Console;
use std::io::Cursor;
use std::sync::{Arc, Mutex};

pub type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;
pub type TestApp = App<Cursor<Vec<u8>>, Vec<u8>>;

/// Generator that returns a canned response and records every prompt
#[derive(Clone)]
pub struct MockGenerator {
    response: RawResponse,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl MockGenerator {
    pub fn new(stdout: &str) -> Self {
        Self::with_streams(stdout, "")
    }

    pub fn with_streams(stdout: &str, stderr: &str) -> Self {
        Self {
            response: RawResponse::new(stdout, stderr),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl Generator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<RawResponse, GeneratorError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.response.clone())
    }
}

/// Generator that always fails the way a missing binary does
pub struct MissingGenerator;

#[async_trait]
impl Generator for MissingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<RawResponse, GeneratorError> {
        Err(GeneratorError::Unavailable {
            program: "copilot".to_string(),
            detail: "No such file or directory (os error 2)".to_string(),
        })
    }
}

/// Plain-text console that reads `input`
pub fn scripted_console(input: &str) -> TestConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// Build an app around `generator` whose console reads `input`
pub fn scripted_app(generator: impl Generator + 'static, input: &str) -> TestApp {
    App::new(
        GeneratorInvoker::new(Box::new(generator)),
        ShellExecutor::default(),
        scripted_console(input),
    )
}

/// Everything the app printed
pub fn output_of(app: TestApp) -> String {
    String::from_utf8(app.into_console().into_output()).unwrap()
}

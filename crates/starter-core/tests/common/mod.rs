//! Shared helpers for the scaffolding tests.

#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::path::{Path, PathBuf};

use starter_core::flow::{ConfirmPrompt, InputPrompt, Prompter, Reply, Slot};
use walkdir::WalkDir;

/// One scripted answer
#[derive(Debug, Clone)]
pub enum Scripted {
    Input(Reply<String>),
    Confirm(Reply<bool>),
}

pub fn text(value: &str) -> Scripted {
    Scripted::Input(Reply::Answer(value.to_string()))
}

pub fn yes_no(value: bool) -> Scripted {
    Scripted::Confirm(Reply::Answer(value))
}

pub fn cancel_input() -> Scripted {
    Scripted::Input(Reply::Cancelled)
}

/// Prompter answering from a fixed script and recording what was asked
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    script: VecDeque<Scripted>,
    pub asked: Vec<Slot>,
    pub messages: Vec<String>,
    pub rejections: Vec<(Slot, String)>,
}

impl ScriptedPrompter {
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            script: script.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.script.is_empty()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, prompt: &InputPrompt) -> anyhow::Result<Reply<String>> {
        self.asked.push(prompt.slot);
        self.messages.push(prompt.message.clone());
        match self.script.pop_front() {
            Some(Scripted::Input(reply)) => Ok(reply),
            other => anyhow::bail!("unexpected input {:?}, script had {:?}", prompt.slot, other),
        }
    }

    fn confirm(&mut self, prompt: &ConfirmPrompt) -> anyhow::Result<Reply<bool>> {
        self.asked.push(prompt.slot);
        self.messages.push(prompt.message.clone());
        match self.script.pop_front() {
            Some(Scripted::Confirm(reply)) => Ok(reply),
            other => anyhow::bail!("unexpected confirm {:?}, script had {:?}", prompt.slot, other),
        }
    }

    fn reject(&mut self, slot: Slot, message: &str) -> anyhow::Result<()> {
        self.rejections.push((slot, message.to_string()));
        Ok(())
    }
}

/// The template shipped in the workspace
pub fn bundled_template() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../template")
        .canonicalize()
        .expect("bundled template exists")
}

/// Every file under `root`, keyed by relative path
pub fn snapshot(root: &Path) -> BTreeMap<String, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative = entry
                .path()
                .strip_prefix(root)
                .expect("walked under root")
                .to_string_lossy()
                .replace('\\', "/");
            let contents = std::fs::read(entry.path()).expect("readable file");
            (relative, contents)
        })
        .collect()
}

/// Parsed package.json of a generated project
pub fn read_package_json(root: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(root.join("package.json")).expect("package.json written");
    serde_json::from_str(&content).expect("package.json is valid JSON")
}

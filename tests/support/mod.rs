#![allow(dead_code)]

use anyhow::{Context, Result, bail};
use serde_json::{Value, json};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::NamedTempFile;
use winelist::render::{Card, DetailView, View};
use winelist::{Category, FilterState};

/// One instruction as received by the view, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    Clear(Category),
    Append(Category, Card),
    Show(DetailView),
    Hide,
    ScrollLocked(bool),
    LogoHidden(bool),
    ActiveFilters(FilterState),
}

/// View that keeps the instruction log plus the resulting state.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub log: Vec<Instruction>,
    pub groups: Vec<(Category, Vec<Card>)>,
    pub overlay: Option<DetailView>,
    pub scroll_locked: bool,
    pub logo_hidden: bool,
}

impl RecordingView {
    pub fn cards(&self, category: &Category) -> Vec<&Card> {
        self.groups
            .iter()
            .filter(|(group, _)| group == category)
            .flat_map(|(_, cards)| cards.iter())
            .collect()
    }

    pub fn all_ids(&self) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|(_, cards)| cards.iter().map(|card| card.id.0.clone()))
            .collect()
    }
}

impl View for RecordingView {
    fn clear_group(&mut self, category: &Category) {
        self.log.push(Instruction::Clear(category.clone()));
        match self.groups.iter_mut().find(|(group, _)| group == category) {
            Some((_, cards)) => cards.clear(),
            None => self.groups.push((category.clone(), Vec::new())),
        }
    }

    fn append_card(&mut self, category: &Category, card: &Card) {
        self.log
            .push(Instruction::Append(category.clone(), card.clone()));
        match self.groups.iter_mut().find(|(group, _)| group == category) {
            Some((_, cards)) => cards.push(card.clone()),
            None => self.groups.push((category.clone(), vec![card.clone()])),
        }
    }

    fn show_detail(&mut self, detail: &DetailView) {
        self.log.push(Instruction::Show(detail.clone()));
        self.overlay = Some(detail.clone());
    }

    fn hide_detail(&mut self) {
        self.log.push(Instruction::Hide);
        self.overlay = None;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.log.push(Instruction::ScrollLocked(locked));
        self.scroll_locked = locked;
    }

    fn set_logo_hidden(&mut self, hidden: bool) {
        self.log.push(Instruction::LogoHidden(hidden));
        self.logo_hidden = hidden;
    }

    fn set_active_filters(&mut self, filters: &FilterState) {
        self.log.push(Instruction::ActiveFilters(filters.clone()));
    }
}

/// Catalog record with every contract field populated.
pub fn wine_json(id: &str, category: &str, country: &str) -> Value {
    json!({
        "id": id,
        "name": format!("Wine {id}"),
        "category": category,
        "pais": country,
        "volume": "75cl",
        "price": 30,
        "subHeader": format!("Blend – Region, {country}"),
        "body": "medio",
        "tasting_es": format!("Cata {id}"),
        "tasting_en": format!("Tasting {id}"),
        "pairing_es": format!("Maridaje {id}"),
        "pairing_en": format!("Pairing {id}"),
        "image": format!("img/{id}.png")
    })
}

pub fn catalog_document(records: &[Value]) -> String {
    serde_json::to_string(records).expect("serialize fixture catalog")
}

pub fn write_catalog(records: &[Value]) -> Result<NamedTempFile> {
    write_text(&catalog_document(records))
}

pub fn write_text(text: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate fixture file")?;
    file.write_all(text.as_bytes())?;
    file.flush()?;
    Ok(file)
}

pub fn bundled_catalog() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/wines.json")
}

pub fn winelist_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_winelist"))
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

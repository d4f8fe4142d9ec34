use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;
use std::path::{Path, PathBuf};
use textblocks_config::Config;
use textblocks_engine::{BlockId, Document, io};

/// Which prompt the input line is collecting a path for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Open,
    Save,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Normal,
    EditBlock { id: BlockId, buffer: String },
    Prompt { kind: PromptKind, buffer: String },
    /// Typing or pasting the original text; `Enter` starts a new line
    Compose { buffer: String },
    ConfirmClear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub level: StatusLevel,
    pub message: String,
}

pub struct App {
    pub document: Document,
    pub config: Config,
    pub mode: Mode,
    pub status: Option<Status>,
    pub current_path: Option<PathBuf>,
    pub list_state: ListState,
    selected: Option<BlockId>,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            document: Document::new(),
            config,
            mode: Mode::Normal,
            status: None,
            current_path: None,
            list_state: ListState::default(),
            selected: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn selected(&self) -> Option<BlockId> {
        self.selected
    }

    /// Index of the selection among visible blocks, for the list widget
    pub fn selected_visible_index(&self) -> Option<usize> {
        let selected = self.selected?;
        self.document
            .visible_blocks()
            .position(|block| block.id() == selected)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode.clone() {
            Mode::Normal => self.handle_normal_key(key),
            Mode::EditBlock { id, buffer } => self.handle_edit_key(key, id, buffer),
            Mode::Prompt { kind, buffer } => self.handle_prompt_key(key, kind, buffer),
            Mode::Compose { buffer } => self.handle_compose_key(key, buffer),
            Mode::ConfirmClear => self.handle_confirm_clear_key(key),
        }
    }

    /// Bracketed paste from the terminal
    ///
    /// In normal mode the pasted text becomes a fresh original text to
    /// split; single-line inputs get it with line breaks dropped.
    pub fn handle_paste(&mut self, text: &str) {
        if self.mode == Mode::Normal {
            self.mode = Mode::Compose {
                buffer: text.to_string(),
            };
            return;
        }

        match &mut self.mode {
            Mode::Compose { buffer } => buffer.push_str(text),
            Mode::EditBlock { buffer, .. } | Mode::Prompt { buffer, .. } => {
                buffer.extend(text.chars().filter(|&c| !matches!(c, '\n' | '\r')))
            }
            Mode::Normal | Mode::ConfirmClear => {}
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Enter => self.begin_edit(),
            KeyCode::Char('t') => self.toggle_title(),
            KeyCode::Char(' ') => self.toggle_expansion(),
            KeyCode::Char('a') => self.add_paragraph(),
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('K') => self.move_selected(-1),
            KeyCode::Char('J') => self.move_selected(1),
            KeyCode::Char('E') => {
                self.document.expand_all();
                self.info("All titles expanded.");
            }
            KeyCode::Char('C') => {
                self.document.collapse_all();
                self.ensure_selection_visible();
                self.info("All titles collapsed.");
            }
            KeyCode::Char('o') => {
                self.mode = Mode::Prompt {
                    kind: PromptKind::Open,
                    buffer: String::new(),
                }
            }
            KeyCode::Char('s') => {
                let buffer = self
                    .current_path
                    .as_ref()
                    .map(|path| path.display().to_string())
                    .unwrap_or_default();
                self.mode = Mode::Prompt {
                    kind: PromptKind::Save,
                    buffer,
                }
            }
            KeyCode::Char('i') => {
                self.mode = Mode::Compose {
                    buffer: self.document.original_text().to_string(),
                }
            }
            KeyCode::Char('r') => self.recreate_blocks(),
            KeyCode::Char('X') => self.mode = Mode::ConfirmClear,
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent, id: BlockId, mut buffer: String) {
        match key.code {
            KeyCode::Enter => {
                self.document.update_block_text(id, buffer.trim());
                self.mode = Mode::Normal;
            }
            KeyCode::Esc => self.mode = Mode::Normal,
            code => {
                edit_buffer(&mut buffer, code);
                self.mode = Mode::EditBlock { id, buffer };
            }
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent, kind: PromptKind, mut buffer: String) {
        match key.code {
            KeyCode::Enter => {
                self.mode = Mode::Normal;
                if buffer.trim().is_empty() {
                    return;
                }
                let path = self.config.resolve_path(&buffer);
                match kind {
                    PromptKind::Open => self.open(&path),
                    PromptKind::Save => {
                        let path = self.config.with_default_extension(&path);
                        self.save(&path);
                    }
                }
            }
            KeyCode::Esc => self.mode = Mode::Normal,
            code => {
                edit_buffer(&mut buffer, code);
                self.mode = Mode::Prompt { kind, buffer };
            }
        }
    }

    fn handle_compose_key(&mut self, key: KeyEvent, mut buffer: String) {
        match key.code {
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.mode = Mode::Normal;
                self.create_blocks(&buffer);
            }
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Enter => {
                buffer.push('\n');
                self.mode = Mode::Compose { buffer };
            }
            code => {
                edit_buffer(&mut buffer, code);
                self.mode = Mode::Compose { buffer };
            }
        }
    }

    fn handle_confirm_clear_key(&mut self, key: KeyEvent) {
        self.mode = Mode::Normal;
        if matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y')) {
            self.document.clear_all();
            self.selected = None;
            self.current_path = None;
            self.info("All content has been cleared.");
        } else {
            self.info("Clear cancelled.");
        }
    }

    /// Load a file, replacing the document
    pub fn open(&mut self, path: &Path) {
        match io::open_document(&mut self.document, path) {
            Ok(count) => {
                self.current_path = Some(path.to_path_buf());
                self.selected = self.document.blocks().first().map(|block| block.id());
                self.info(format!(
                    "File '{}' loaded: {count} blocks created.",
                    path.display()
                ));
            }
            Err(io::IoError::EmptyInput) => {
                log::warn!("{} is empty", path.display());
                self.warn("Empty input: the file has no text to split into blocks.");
            }
            Err(e) => {
                log::error!("failed to open {}: {e}", path.display());
                self.error(format!("Failed to read file: {e}"));
            }
        }
    }

    pub fn save(&mut self, path: &Path) {
        match io::save_document(&self.document, path) {
            Ok(_) => {
                self.current_path = Some(path.to_path_buf());
                self.info(format!("Content saved to '{}'.", path.display()));
            }
            Err(io::IoError::NothingToSave) => {
                log::warn!("nothing to save");
                self.warn("Nothing to save: there is no visible text content.");
            }
            Err(e) => {
                log::error!("failed to save {}: {e}", path.display());
                self.error(format!("Failed to save file: {e}"));
            }
        }
    }

    fn recreate_blocks(&mut self) {
        let original = self.document.original_text().to_string();
        self.create_blocks(&original);
    }

    /// Split `text` into blocks, replacing the document
    fn create_blocks(&mut self, text: &str) {
        match io::validate_input(text) {
            Ok(text) => {
                self.document.process_original_text(text);
                self.selected = self.document.blocks().first().map(|block| block.id());
                self.info(format!(
                    "Text processed! {} blocks created.",
                    self.document.len()
                ));
            }
            Err(_) => self.warn("Empty input: enter or open some text first."),
        }
    }

    fn begin_edit(&mut self) {
        if let Some(id) = self.selected
            && let Some(block) = self.document.block(id)
        {
            self.mode = Mode::EditBlock {
                id,
                buffer: block.text().to_string(),
            };
        }
    }

    fn toggle_title(&mut self) {
        if let Some(id) = self.selected
            && let Some(block) = self.document.block(id)
        {
            let is_title = !block.is_title();
            self.document.toggle_title_status(id, is_title);
            self.ensure_selection_visible();
        }
    }

    fn toggle_expansion(&mut self) {
        if let Some(id) = self.selected {
            self.document.toggle_title_expansion(id);
        }
    }

    fn add_paragraph(&mut self) {
        let index = self
            .selected
            .and_then(|id| self.document.position(id))
            .map(|position| position + 1);
        let id = self.document.add_empty_paragraph(index);
        self.document.reveal(id);
        self.selected = Some(id);
        self.mode = Mode::EditBlock {
            id,
            buffer: String::new(),
        };
    }

    fn delete_selected(&mut self) {
        let Some(id) = self.selected else {
            return;
        };
        let visible = self.visible_ids();
        let neighbour = visible
            .iter()
            .position(|&v| v == id)
            .and_then(|i| visible.get(i + 1).or_else(|| i.checked_sub(1).and_then(|p| visible.get(p))))
            .copied();

        self.document.delete_block(id);
        self.selected = neighbour;
        self.ensure_selection_visible();
    }

    fn move_selected(&mut self, offset: isize) {
        let Some(id) = self.selected else {
            return;
        };
        let Some(position) = self.document.position(id) else {
            return;
        };
        let Some(to) = position.checked_add_signed(offset) else {
            return;
        };
        self.document.move_block(id, to);
        self.document.reveal(id);
    }

    fn select_next(&mut self) {
        let visible = self.visible_ids();
        self.selected = match self.selected_visible_index() {
            Some(i) => visible.get(i + 1).or(visible.last()).copied(),
            None => visible.first().copied(),
        };
    }

    fn select_previous(&mut self) {
        let visible = self.visible_ids();
        self.selected = match self.selected_visible_index() {
            Some(i) => visible.get(i.saturating_sub(1)).copied(),
            None => visible.first().copied(),
        };
    }

    /// Move the selection to the nearest visible block at or above it
    fn ensure_selection_visible(&mut self) {
        let blocks = self.document.blocks();
        let position = self.selected.and_then(|id| self.document.position(id));

        self.selected = match position {
            Some(p) => blocks[..=p]
                .iter()
                .rev()
                .chain(blocks[p + 1..].iter())
                .find(|block| block.visible())
                .map(|block| block.id()),
            None => blocks.iter().find(|b| b.visible()).map(|b| b.id()),
        };
    }

    fn visible_ids(&self) -> Vec<BlockId> {
        self.document.visible_blocks().map(|block| block.id()).collect()
    }

    fn info(&mut self, message: impl Into<String>) {
        self.set_status(StatusLevel::Info, message);
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.set_status(StatusLevel::Warning, message);
    }

    fn error(&mut self, message: impl Into<String>) {
        self.set_status(StatusLevel::Error, message);
    }

    fn set_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        self.status = Some(Status {
            level,
            message: message.into(),
        });
    }
}

fn edit_buffer(buffer: &mut String, code: KeyCode) {
    match code {
        KeyCode::Char(c) => buffer.push(c),
        KeyCode::Backspace => {
            buffer.pop();
        }
        _ => {}
    }
}

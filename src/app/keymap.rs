use std::sync::{Arc, LazyLock};

use anyhow::{Context, Result, anyhow, bail};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::Deserialize;

use crate::state::Toggle;

use super::input::KeyAction;

const DEFAULT_KEYMAP: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/keymap/default.keymap.json"
));

/// Where a binding applies. `Global` bindings are consulted after the
/// bindings of the active context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) enum KeymapContext {
    Global,
    Guide,
    Settings,
}

impl KeymapContext {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "global" => Some(KeymapContext::Global),
            "guide" => Some(KeymapContext::Guide),
            "settings" => Some(KeymapContext::Settings),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
struct RawEntry {
    id: String,
    description: String,
    contexts: Vec<String>,
    action: RawAction,
    combos: Vec<String>,
}

#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "camelCase")]
enum RawToggle {
    DarkMode,
    ImageMode,
    ThickBorder,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum RawAction {
    Quit,
    ResetStatus,
    SwitchTab { delta: i32 },
    PickStep { delta: i32 },
    PageStep { delta: i32 },
    CycleViewMode,
    ItemsPerPageStep { delta: i32 },
    OpenItemsPerPage,
    Toggle { feature: RawToggle },
    SettingsStep { delta: i32 },
    SettingsAdjust { delta: i32 },
    Activate,
}

impl RawAction {
    fn into_action(self) -> KeyAction {
        match self {
            RawAction::Quit => KeyAction::Quit,
            RawAction::ResetStatus => KeyAction::ResetStatus,
            RawAction::SwitchTab { delta } => KeyAction::SwitchTab(delta),
            RawAction::PickStep { delta } => KeyAction::PickStep(delta),
            RawAction::PageStep { delta } => KeyAction::PageStep(delta),
            RawAction::CycleViewMode => KeyAction::CycleViewMode,
            RawAction::ItemsPerPageStep { delta } => KeyAction::ItemsPerPageStep(delta),
            RawAction::OpenItemsPerPage => KeyAction::OpenItemsPerPage,
            RawAction::Toggle { feature } => KeyAction::Toggle(match feature {
                RawToggle::DarkMode => Toggle::DarkMode,
                RawToggle::ImageMode => Toggle::ImageMode,
                RawToggle::ThickBorder => Toggle::ThickBorder,
            }),
            RawAction::SettingsStep { delta } => KeyAction::SettingsStep(delta),
            RawAction::SettingsAdjust { delta } => KeyAction::SettingsAdjust(delta),
            RawAction::Activate => KeyAction::Activate,
        }
    }
}

#[derive(Debug)]
struct KeyBinding {
    action: KeyAction,
    contexts: Vec<KeymapContext>,
    combos: Vec<KeyPattern>,
    snippet: String,
}

impl KeyBinding {
    fn from_raw(raw: RawEntry) -> Result<Self> {
        let contexts = raw
            .contexts
            .iter()
            .map(|ctx| {
                KeymapContext::parse(ctx)
                    .ok_or_else(|| anyhow!("keymap entry {} has unknown context '{ctx}'", raw.id))
            })
            .collect::<Result<Vec<_>>>()?;
        if contexts.is_empty() {
            bail!("keymap entry {} must declare at least one context", raw.id);
        }
        let combos = raw
            .combos
            .iter()
            .map(|combo| {
                KeyPattern::parse(combo)
                    .map_err(|err| anyhow!("failed to parse combo '{combo}' for {}: {err}", raw.id))
            })
            .collect::<Result<Vec<_>>>()?;
        if combos.is_empty() {
            bail!("keymap entry {} must declare combos", raw.id);
        }
        let combos_display = combos
            .iter()
            .map(|pattern| pattern.display.as_str())
            .collect::<Vec<_>>()
            .join("/");
        let snippet = format!("{combos_display} {}", raw.description);
        Ok(Self {
            action: raw.action.into_action(),
            contexts,
            combos,
            snippet,
        })
    }

    fn matches(&self, key: &KeyEvent) -> Option<KeyAction> {
        self.combos
            .iter()
            .any(|pattern| pattern.matches(key))
            .then_some(self.action)
    }
}

#[derive(Debug)]
struct KeyPattern {
    matcher: CodeMatcher,
    required: KeyModifiers,
    allow_shift: bool,
    display: String,
}

impl KeyPattern {
    fn parse(combo: &str) -> Result<Self, String> {
        let display = combo.trim().to_string();
        if display.is_empty() {
            return Err("combo cannot be empty".into());
        }
        let mut tokens = display
            .split('+')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>();
        let Some(key_token) = tokens.pop() else {
            return Err("combo must contain key".into());
        };
        let matcher = CodeMatcher::from_token(key_token)?;
        let mut required = KeyModifiers::empty();
        for token in tokens {
            match token.to_lowercase().as_str() {
                "ctrl" | "control" => required |= KeyModifiers::CONTROL,
                "shift" => required |= KeyModifiers::SHIFT,
                "alt" => required |= KeyModifiers::ALT,
                other => return Err(format!("unsupported modifier '{other}'")),
            }
        }
        let allow_shift = matcher.allows_extra_shift() && !required.contains(KeyModifiers::SHIFT);
        Ok(Self {
            matcher,
            required,
            allow_shift,
            display,
        })
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        if !self.matcher.matches(&key.code) || !key.modifiers.contains(self.required) {
            return false;
        }
        let extra = key.modifiers.difference(self.required);
        if self.allow_shift {
            extra.difference(KeyModifiers::SHIFT).is_empty()
        } else {
            extra.is_empty()
        }
    }
}

#[derive(Debug, Clone)]
enum CodeMatcher {
    Literal(KeyCode),
    Char(char),
}

impl CodeMatcher {
    fn from_token(token: &str) -> Result<Self, String> {
        let normalized = token.to_lowercase();
        let matcher = match normalized.as_str() {
            "tab" => CodeMatcher::Literal(KeyCode::Tab),
            "backtab" => CodeMatcher::Literal(KeyCode::BackTab),
            "enter" => CodeMatcher::Literal(KeyCode::Enter),
            "esc" | "escape" => CodeMatcher::Literal(KeyCode::Esc),
            "left" => CodeMatcher::Literal(KeyCode::Left),
            "right" => CodeMatcher::Literal(KeyCode::Right),
            "up" => CodeMatcher::Literal(KeyCode::Up),
            "down" => CodeMatcher::Literal(KeyCode::Down),
            "pageup" => CodeMatcher::Literal(KeyCode::PageUp),
            "pagedown" => CodeMatcher::Literal(KeyCode::PageDown),
            "home" => CodeMatcher::Literal(KeyCode::Home),
            "end" => CodeMatcher::Literal(KeyCode::End),
            "space" => CodeMatcher::Char(' '),
            "plus" => CodeMatcher::Char('+'),
            "minus" => CodeMatcher::Char('-'),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => CodeMatcher::Char(ch),
                    _ => return Err(format!("unsupported key '{token}'")),
                }
            }
        };
        Ok(matcher)
    }

    fn matches(&self, code: &KeyCode) -> bool {
        match (self, code) {
            (CodeMatcher::Literal(expected), actual) => actual == expected,
            (CodeMatcher::Char(expected), KeyCode::Char(actual)) => {
                actual.to_ascii_lowercase() == *expected
            }
            _ => false,
        }
    }

    fn allows_extra_shift(&self) -> bool {
        matches!(
            self,
            CodeMatcher::Char(_) | CodeMatcher::Literal(KeyCode::BackTab)
        )
    }
}

/// Parsed key bindings, looked up per context.
#[derive(Debug)]
pub struct KeymapStore {
    bindings: Vec<KeyBinding>,
}

impl KeymapStore {
    pub fn from_json(source: &str) -> Result<Self> {
        let raw_entries: Vec<RawEntry> =
            serde_json::from_str(source).context("keymap is not a valid JSON binding list")?;
        let bindings = raw_entries
            .into_iter()
            .map(KeyBinding::from_raw)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { bindings })
    }

    pub(crate) fn classify(&self, key: &KeyEvent, context: KeymapContext) -> Option<KeyAction> {
        self.lookup(key, context)
            .or_else(|| self.lookup(key, KeymapContext::Global))
    }

    fn lookup(&self, key: &KeyEvent, context: KeymapContext) -> Option<KeyAction> {
        self.bindings
            .iter()
            .filter(|binding| binding.contexts.contains(&context))
            .find_map(|binding| binding.matches(key))
    }

    pub(crate) fn help_text(&self, context: KeymapContext) -> Option<String> {
        let snippets = self
            .bindings
            .iter()
            .filter(|binding| {
                binding.contexts.contains(&context)
                    || binding.contexts.contains(&KeymapContext::Global)
            })
            .map(|binding| binding.snippet.as_str())
            .collect::<Vec<_>>();
        (!snippets.is_empty()).then(|| snippets.join(" • "))
    }
}

static DEFAULT_STORE: LazyLock<Arc<KeymapStore>> = LazyLock::new(|| {
    Arc::new(KeymapStore::from_json(DEFAULT_KEYMAP).unwrap_or_else(|err| {
        tracing::error!("bundled keymap is invalid: {err:#}");
        KeymapStore { bindings: Vec::new() }
    }))
});

pub(crate) fn default_store() -> Arc<KeymapStore> {
    Arc::clone(&DEFAULT_STORE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn bundled_keymap_parses() {
        let store = KeymapStore::from_json(DEFAULT_KEYMAP).expect("bundled keymap");
        assert!(!store.bindings.is_empty());
    }

    #[test]
    fn context_bindings_shadow_global_ones() {
        let store = default_store();
        let down = key(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(
            store.classify(&down, KeymapContext::Guide),
            Some(KeyAction::PickStep(1))
        );
        assert_eq!(
            store.classify(&down, KeymapContext::Settings),
            Some(KeyAction::SettingsStep(1))
        );
        let toggle = key(KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(
            store.classify(&toggle, KeymapContext::Settings),
            Some(KeyAction::Toggle(Toggle::DarkMode))
        );
    }

    #[test]
    fn shifted_plus_matches() {
        let store = default_store();
        let plus = key(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(
            store.classify(&plus, KeymapContext::Guide),
            Some(KeyAction::ItemsPerPageStep(1))
        );
        let ctrl_c = key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(store.classify(&ctrl_c, KeymapContext::Guide), Some(KeyAction::Quit));
        let plain_c = key(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(store.classify(&plain_c, KeymapContext::Guide), None);
    }

    #[test]
    fn bad_entries_are_reported() {
        let err = KeymapStore::from_json(
            r#"[{"id":"x","description":"x","contexts":["nowhere"],"action":{"kind":"quit"},"combos":["q"]}]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown context"));

        let err = KeymapStore::from_json(
            r#"[{"id":"x","description":"x","contexts":["global"],"action":{"kind":"quit"},"combos":["Hyper+q"]}]"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unsupported modifier"));
    }

    #[test]
    fn help_lists_context_and_global_bindings() {
        let help = default_store()
            .help_text(KeymapContext::Settings)
            .expect("help");
        assert!(help.contains("Next setting"));
        assert!(help.contains("Quit"));
        assert!(!help.contains("Next page"));
    }
}

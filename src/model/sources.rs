//! Source buffers - the three editable texts that make up a playground

use serde::{Deserialize, Serialize};

/// Identifies one of the three editable buffers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BufferKind {
    Markup,
    Style,
    Script,
}

impl BufferKind {
    pub const ALL: [BufferKind; 3] = [BufferKind::Markup, BufferKind::Style, BufferKind::Script];

    /// Human-readable language label (used in pane headers and toasts)
    pub fn label(self) -> &'static str {
        match self {
            BufferKind::Markup => "HTML",
            BufferKind::Style => "CSS",
            BufferKind::Script => "JavaScript",
        }
    }
}

/// Where a buffer change came from
///
/// Chrome edits are already on screen; everything else has to be pushed
/// back to the chrome on the next redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOrigin {
    Chrome,
    External,
}

/// The three source buffers plus change tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBundle {
    pub markup: String,
    pub style: String,
    pub script: String,
    /// Bumped on every change to any buffer
    revision: u64,
    /// Revision of the last change that did not come from the chrome
    external_revision: u64,
}

impl SourceBundle {
    pub fn new(
        markup: impl Into<String>,
        style: impl Into<String>,
        script: impl Into<String>,
    ) -> Self {
        Self {
            markup: markup.into(),
            style: style.into(),
            script: script.into(),
            revision: 0,
            external_revision: 0,
        }
    }

    /// The sample shown on first launch
    pub fn welcome() -> Self {
        Self::new(WELCOME_MARKUP, WELCOME_STYLE, WELCOME_SCRIPT)
    }

    /// The minimal template used by "Reset"
    pub fn starter() -> Self {
        Self::new(STARTER_MARKUP, STARTER_STYLE, STARTER_SCRIPT)
    }

    pub fn get(&self, kind: BufferKind) -> &str {
        match kind {
            BufferKind::Markup => &self.markup,
            BufferKind::Style => &self.style,
            BufferKind::Script => &self.script,
        }
    }

    /// Replace one buffer wholesale.
    ///
    /// Returns false (and leaves the revision untouched) when the text is unchanged.
    pub fn set(&mut self, kind: BufferKind, text: String, origin: EditOrigin) -> bool {
        let slot = match kind {
            BufferKind::Markup => &mut self.markup,
            BufferKind::Style => &mut self.style,
            BufferKind::Script => &mut self.script,
        };
        if *slot == text {
            return false;
        }
        *slot = text;
        self.bump(origin);
        true
    }

    /// Replace all three buffers at once (reset)
    pub fn replace_all(&mut self, other: SourceBundle, origin: EditOrigin) {
        self.markup = other.markup;
        self.style = other.style;
        self.script = other.script;
        self.bump(origin);
    }

    fn bump(&mut self, origin: EditOrigin) {
        self.revision += 1;
        if origin == EditOrigin::External {
            self.external_revision = self.revision;
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn external_revision(&self) -> u64 {
        self.external_revision
    }

    /// Line count of one buffer, counting an empty buffer as one line
    pub fn line_count(&self, kind: BufferKind) -> usize {
        self.get(kind).split('\n').count()
    }

    /// Lines across all three buffers
    pub fn total_lines(&self) -> usize {
        BufferKind::ALL.iter().map(|&k| self.line_count(k)).sum()
    }

    /// Characters across all three buffers
    pub fn total_chars(&self) -> usize {
        BufferKind::ALL
            .iter()
            .map(|&k| self.get(k).chars().count())
            .sum()
    }
}

impl Default for SourceBundle {
    fn default() -> Self {
        Self::welcome()
    }
}

const STARTER_MARKUP: &str = "<!-- Start coding your HTML here -->\n<h1>Hello World!</h1>";
const STARTER_STYLE: &str =
    "/* Start styling here */\nh1 {\n  color: #333;\n  text-align: center;\n}";
const STARTER_SCRIPT: &str = "// Start scripting here\nconsole.log(\"Hello from JavaScript!\");";

const WELCOME_MARKUP: &str = r#"<div class="container">
    <h1>Welcome to livepad</h1>
    <p>Edit the HTML, CSS, and JavaScript to see real-time changes!</p>
    <button onclick="showMessage()">Click me!</button>
    <div id="output"></div>
</div>"#;

const WELCOME_STYLE: &str = r#"/* CSS Styles */
.container {
    max-width: 800px;
    margin: 40px auto;
    padding: 20px;
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    border-radius: 12px;
    color: white;
    text-align: center;
}

button {
    background: rgba(255,255,255,0.2);
    border: 2px solid rgba(255,255,255,0.3);
    color: white;
    padding: 12px 24px;
    border-radius: 8px;
    cursor: pointer;
}

#output {
    margin-top: 2rem;
    min-height: 50px;
}"#;

const WELCOME_SCRIPT: &str = r#"// JavaScript Code
function showMessage() {
    const output = document.getElementById('output');
    const messages = ['Great job!', 'Keep coding!', 'Nice work!'];
    const pick = messages[Math.floor(Math.random() * messages.length)];
    output.innerHTML = `<h3>${pick}</h3><p>Clicked at: ${new Date().toLocaleTimeString()}</p>`;
}

console.log('livepad is running!');

// Uncomment to see error reporting:
// throw new Error('This is a test error');"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_bumps_revision_only_on_change() {
        let mut bundle = SourceBundle::new("a", "b", "c");
        assert!(!bundle.set(BufferKind::Markup, "a".into(), EditOrigin::Chrome));
        assert_eq!(bundle.revision(), 0);

        assert!(bundle.set(BufferKind::Markup, "x".into(), EditOrigin::Chrome));
        assert_eq!(bundle.revision(), 1);
        assert_eq!(bundle.external_revision(), 0);

        assert!(bundle.set(BufferKind::Style, "y".into(), EditOrigin::External));
        assert_eq!(bundle.revision(), 2);
        assert_eq!(bundle.external_revision(), 2);
    }

    #[test]
    fn stats_count_empty_buffers_as_one_line() {
        let bundle = SourceBundle::new("", "a\nb", "ü");
        assert_eq!(bundle.line_count(BufferKind::Markup), 1);
        assert_eq!(bundle.total_lines(), 4);
        assert_eq!(bundle.total_chars(), 4);
    }
}

//! Command grammar tree
//!
//! One tree describes every verb, sub-verb and argument slot the interpreter
//! understands. The dispatcher resolves tokens against it and the suggestion
//! engine enumerates it, so the two cannot disagree about what is valid at a
//! given position.

use std::borrow::Cow;

/// Top-level verbs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Primary,
    UsernameSwitch,
    Alias,
    Unalias,
    History,
    Clear,
    Switch,
    Exit,
    Sudo,
}

/// Sub-commands of the primary command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sub {
    Help,
    Sections,
    Projects,
    Resume,
    Contact,
    Stack,
    Education,
    Experience,
    Timeline,
    Dev,
    Coffee,
    Konami,
    Matrix,
    Fortune,
    Roll,
    Rick,
    Zen,
    Haiku,
    Ping,
}

/// Browsable sections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Education,
    Experience,
    Certifications,
    Stack,
    Projects,
    Resume,
    Contact,
}

/// Identity of a grammar node, matched on by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeId {
    Verb(Verb),
    Sub(Sub),
    SectionsList,
    Section(Section),
    ProjectsList,
    ProjectsOpen,
    ResumeDownload,
    DevContact,
}

/// Arguments whose values come from the content store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// 1-based project position
    ProjectIndex,
    /// Project name (quoted when it contains spaces)
    ProjectName,
    /// Resume language code
    Language,
}

/// A word in the grammar
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    /// Exact token that selects this node
    pub word: Cow<'static, str>,
    /// Text shown in the suggestion list (and matched against partial input)
    pub display: Cow<'static, str>,
    /// Text inserted when the suggestion is accepted
    pub insert: Cow<'static, str>,
    pub description: &'static str,
    /// Dispatchable but never suggested
    pub hidden: bool,
    pub children: Vec<Node>,
    pub slot: Option<Slot>,
}

impl Node {
    fn leaf(id: NodeId, word: &'static str, description: &'static str) -> Self {
        Self {
            id,
            word: Cow::Borrowed(word),
            display: Cow::Borrowed(word),
            insert: Cow::Borrowed(word),
            description,
            hidden: false,
            children: Vec::new(),
            slot: None,
        }
    }

    /// A node that expects more input: its insert text ends in a space
    fn branch(id: NodeId, word: &'static str, description: &'static str) -> Self {
        Self {
            insert: Cow::Owned(format!("{} ", word)),
            ..Self::leaf(id, word, description)
        }
    }

    fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    fn with_slot(mut self, slot: Slot) -> Self {
        self.slot = Some(slot);
        self
    }

    fn with_display(mut self, display: String) -> Self {
        self.insert = Cow::Owned(display.clone());
        self.display = Cow::Owned(display);
        self
    }

    fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Child selected by an exact token
    pub fn child(&self, word: &str) -> Option<&Node> {
        lookup(&self.children, word)
    }

    /// Child selected by a token, ignoring ASCII case
    pub fn child_ignore_case(&self, word: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|n| n.word.eq_ignore_ascii_case(word))
    }

    /// Children offered as suggestions
    pub fn visible_children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(|n| !n.hidden)
    }

    /// Whether anything can follow this node
    pub fn accepts_more(&self) -> bool {
        !self.children.is_empty() || self.slot.is_some()
    }
}

/// Find the node selected by an exact token
pub fn lookup<'a>(nodes: &'a [Node], word: &str) -> Option<&'a Node> {
    nodes.iter().find(|n| n.word == word)
}

/// Top-level words other than the primary command
pub const GLOBAL_VERBS: &[&str] = &[
    "username-switch",
    "alias",
    "unalias",
    "history",
    "clear",
    "switch",
    "exit",
    "sudo",
];

/// The full command grammar for one primary command name
#[derive(Debug, Clone)]
pub struct Grammar {
    root: Vec<Node>,
}

impl Grammar {
    /// Build the grammar around the given primary command word
    pub fn new(primary: &str) -> Self {
        let mut primary_node = Node::branch(NodeId::Verb(Verb::Primary), "", "main command")
            .with_children(primary_children());
        primary_node.word = Cow::Owned(primary.to_string());
        primary_node.display = Cow::Owned(primary.to_string());
        primary_node.insert = Cow::Owned(format!("{} ", primary));

        let root = vec![
            primary_node,
            Node::branch(
                NodeId::Verb(Verb::UsernameSwitch),
                "username-switch",
                "change prompt username",
            ),
            Node::branch(NodeId::Verb(Verb::Alias), "alias", "define or list aliases"),
            Node::branch(NodeId::Verb(Verb::Unalias), "unalias", "remove alias"),
            Node::leaf(NodeId::Verb(Verb::History), "history", "show history"),
            Node::leaf(NodeId::Verb(Verb::Clear), "clear", "clear screen"),
            Node::leaf(NodeId::Verb(Verb::Switch), "switch", "return to GUI")
                .with_display("switch gui".to_string()),
            Node::leaf(NodeId::Verb(Verb::Exit), "exit", "return to GUI"),
            Node::leaf(NodeId::Verb(Verb::Sudo), "sudo", "easter egg")
                .with_display(format!("sudo {} hack", primary)),
        ];

        Self { root }
    }

    /// Top-level nodes, primary command first
    pub fn root(&self) -> &[Node] {
        &self.root
    }

    /// The primary command node
    pub fn primary(&self) -> &Node {
        &self.root[0]
    }

    /// The primary command word
    pub fn primary_word(&self) -> &str {
        &self.root[0].word
    }

    /// Resolve a top-level verb
    pub fn verb(&self, word: &str) -> Option<Verb> {
        match lookup(&self.root, word)?.id {
            NodeId::Verb(verb) => Some(verb),
            _ => None,
        }
    }
}

fn primary_children() -> Vec<Node> {
    use NodeId::Sub as S;

    let sections = Node::branch(S(Sub::Sections), "sections", "browse sections").with_children(vec![
        Node::leaf(NodeId::SectionsList, "ls", "list sections"),
        Node::leaf(NodeId::Section(Section::About), "about", "bio"),
        Node::leaf(NodeId::Section(Section::Education), "education", "timeline"),
        Node::leaf(NodeId::Section(Section::Experience), "experience", "timeline"),
        Node::leaf(NodeId::Section(Section::Certifications), "certifications", "certs"),
        Node::leaf(NodeId::Section(Section::Stack), "stack", "tech stack"),
        Node::leaf(NodeId::Section(Section::Projects), "projects", "project list"),
        Node::leaf(NodeId::Section(Section::Resume), "resume", "resume files"),
        Node::leaf(NodeId::Section(Section::Contact), "contact", "contact info"),
    ]);

    let projects = Node::branch(S(Sub::Projects), "projects", "project commands")
        .with_children(vec![
            Node::leaf(NodeId::ProjectsList, "ls", "list projects"),
            Node::branch(NodeId::ProjectsOpen, "open", "open project link")
                .with_slot(Slot::ProjectIndex),
        ])
        .with_slot(Slot::ProjectName);

    let resume = Node::branch(S(Sub::Resume), "resume", "download resume").with_children(vec![
        Node::branch(NodeId::ResumeDownload, "-d", "download language").with_slot(Slot::Language),
    ]);

    let dev = Node::branch(S(Sub::Dev), "dev", "developer tools")
        .with_children(vec![Node::leaf(NodeId::DevContact, "contact", "send a message")]);

    vec![
        sections,
        projects,
        resume,
        Node::leaf(S(Sub::Contact), "contact", "contact info"),
        Node::leaf(S(Sub::Stack), "stack", "tech stack overview"),
        dev,
        Node::leaf(S(Sub::Coffee), "coffee", "just for fun"),
        Node::leaf(S(Sub::Konami), "konami", "???"),
        Node::leaf(S(Sub::Matrix), "matrix", "lines of green"),
        Node::leaf(S(Sub::Fortune), "fortune", "today's vibe"),
        Node::leaf(S(Sub::Roll), "roll", "random project"),
        Node::leaf(S(Sub::Rick), "rick", "never gonna?"),
        Node::leaf(S(Sub::Zen), "zen", "moment of calm"),
        Node::leaf(S(Sub::Haiku), "haiku", "code poetry"),
        Node::leaf(S(Sub::Ping), "ping", "pong included"),
        Node::leaf(S(Sub::Education), "education", "education timeline"),
        Node::leaf(S(Sub::Experience), "experience", "experience timeline"),
        Node::leaf(S(Sub::Help), "--help", "help"),
        Node::leaf(S(Sub::Help), "-h", "help"),
        Node::leaf(S(Sub::Timeline), "timeline", "split into education/experience").hidden(),
    ]
}

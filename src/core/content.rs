//! # Static Content
//!
//! The two tables the whole application displays: the ordered list of core
//! concepts and the four code examples behind the tab menu.
//!
//! Both are compiled in and never change. The tab menu offers exactly the
//! keys in [`TAB_ORDER`], and [`EXAMPLES`] holds one record per key stored at
//! the key's own index, so [`example`] is a plain indexed read. [`validate`]
//! checks that the tables agree; it runs once at startup and in the tests.

use clap::ValueEnum;
use std::collections::HashSet;
use std::fmt;

/// Reference to an image asset. Terminals can't draw it, so cards only
/// show the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef(pub &'static str);

impl ImageRef {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConceptRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub image: ImageRef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub code: &'static str,
}

/// The closed set of example topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ExampleKey {
    Components,
    Jsx,
    Props,
    State,
}

impl ExampleKey {
    pub const ALL: [ExampleKey; 4] = [
        ExampleKey::Components,
        ExampleKey::Jsx,
        ExampleKey::Props,
        ExampleKey::State,
    ];

    /// Slot of this key's record in [`EXAMPLES`].
    pub fn index(self) -> usize {
        match self {
            ExampleKey::Components => 0,
            ExampleKey::Jsx => 1,
            ExampleKey::Props => 2,
            ExampleKey::State => 3,
        }
    }

    /// Text shown on the tab button.
    pub fn label(self) -> &'static str {
        match self {
            ExampleKey::Components => "Components",
            ExampleKey::Jsx => "JSX",
            ExampleKey::Props => "Props",
            ExampleKey::State => "State",
        }
    }

    /// Digit key that activates this tab directly.
    pub fn hotkey(self) -> char {
        match self {
            ExampleKey::Components => '1',
            ExampleKey::Jsx => '2',
            ExampleKey::Props => '3',
            ExampleKey::State => '4',
        }
    }

    pub fn from_hotkey(c: char) -> Option<ExampleKey> {
        ExampleKey::ALL.into_iter().find(|key| key.hotkey() == c)
    }
}

impl fmt::Display for ExampleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub const CORE_CONCEPTS: [ConceptRecord; 4] = [
    ConceptRecord {
        title: "Components",
        description: "The core UI building block - compose the user interface by combining multiple components.",
        image: ImageRef("components.png"),
    },
    ConceptRecord {
        title: "JSX",
        description: "Return (potentially dynamic) HTML(ish) code to define the actual markup that will be rendered.",
        image: ImageRef("jsx-ui.png"),
    },
    ConceptRecord {
        title: "Props",
        description: "Make components configurable (and therefore reusable) by passing input data to them.",
        image: ImageRef("config.png"),
    },
    ConceptRecord {
        title: "State",
        description: "React-managed data which, when changed, causes the component to re-render & the UI to update.",
        image: ImageRef("state-mgmt.png"),
    },
];

/// Keys offered by the tab menu, left to right.
pub const TAB_ORDER: [ExampleKey; 4] = ExampleKey::ALL;

pub static EXAMPLES: [(ExampleKey, ExampleRecord); 4] = [
    (
        ExampleKey::Components,
        ExampleRecord {
            title: "Components",
            description: "Components are the building blocks of React applications. A component is a self-contained module (HTML + optional CSS + JS) that renders some output.",
            code: r#"function Welcome() {
  return <h1>Hello, World!</h1>;
}"#,
        },
    ),
    (
        ExampleKey::Jsx,
        ExampleRecord {
            title: "JSX",
            description: "JSX is a syntax extension to JavaScript. It is similar to a template language, but it has full power of JavaScript (e.g., it may output dynamic content).",
            code: r#"<div>
  <h1>Welcome {userName}</h1>
  <p>Time to learn React!</p>
</div>"#,
        },
    ),
    (
        ExampleKey::Props,
        ExampleRecord {
            title: "Props",
            description: "Components accept arbitrary inputs called props. They are like function arguments.",
            code: r#"function Welcome(props) {
  return <h1>Hello, {props.name}</h1>;
}"#,
        },
    ),
    (
        ExampleKey::State,
        ExampleRecord {
            title: "State",
            description: "State allows React components to change their output over time in response to user actions, network responses, and anything else.",
            code: r#"function Counter() {
  const [isVisible, setIsVisible] = useState(false);

  function handleClick() {
    setIsVisible(true);
  }

  return (
    <div>
      <button onClick={handleClick}>Show Details</button>
      {isVisible && <p>Amazing details!</p>}
    </div>
  );
}"#,
        },
    ),
];

/// Look up the example record for a tab key.
pub fn example(key: ExampleKey) -> &'static ExampleRecord {
    let (stored, record) = &EXAMPLES[key.index()];
    debug_assert_eq!(*stored, key, "example table out of key order");
    record
}

// ============================================================================
// Consistency check
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// A tab offers a key with no record in the examples table.
    MissingExample(ExampleKey),
    /// The record stored in a slot belongs to another key.
    MisplacedExample { slot: usize, found: ExampleKey },
    /// The tab menu offers the same key twice.
    DuplicateTab(ExampleKey),
    /// Two concepts share a title, which is their identity.
    DuplicateConcept(&'static str),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::MissingExample(key) => {
                write!(f, "tab '{key}' has no example record")
            }
            ContentError::MisplacedExample { slot, found } => {
                write!(f, "example slot {slot} holds the record for '{found}'")
            }
            ContentError::DuplicateTab(key) => write!(f, "tab '{key}' is offered twice"),
            ContentError::DuplicateConcept(title) => {
                write!(f, "concept title '{title}' is used twice")
            }
        }
    }
}

impl std::error::Error for ContentError {}

/// Check that the tab menu, the examples table and the concepts agree.
pub fn validate() -> Result<(), ContentError> {
    check_tables(&TAB_ORDER, &EXAMPLES, &CORE_CONCEPTS)
}

fn check_tables(
    tabs: &[ExampleKey],
    examples: &[(ExampleKey, ExampleRecord)],
    concepts: &[ConceptRecord],
) -> Result<(), ContentError> {
    for (slot, (key, _)) in examples.iter().enumerate() {
        if key.index() != slot {
            return Err(ContentError::MisplacedExample { slot, found: *key });
        }
    }

    let mut offered = HashSet::new();
    for &key in tabs {
        if !offered.insert(key) {
            return Err(ContentError::DuplicateTab(key));
        }
        if !examples.iter().any(|(stored, _)| *stored == key) {
            return Err(ContentError::MissingExample(key));
        }
    }

    let mut titles = HashSet::new();
    for concept in concepts {
        if !titles.insert(concept.title) {
            return Err(ContentError::DuplicateConcept(concept.title));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_consistent() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn test_every_tab_has_an_example() {
        for key in TAB_ORDER {
            let record = example(key);
            assert_eq!(record.title, key.label());
            assert!(!record.code.is_empty());
        }
    }

    #[test]
    fn test_tab_order_covers_every_key() {
        let offered: HashSet<_> = TAB_ORDER.iter().copied().collect();
        let all: HashSet<_> = ExampleKey::ALL.iter().copied().collect();
        assert_eq!(offered, all);
    }

    #[test]
    fn test_missing_example_detected() {
        let partial = &EXAMPLES[..2];
        assert_eq!(
            check_tables(&TAB_ORDER, partial, &CORE_CONCEPTS),
            Err(ContentError::MissingExample(ExampleKey::Props))
        );
    }

    #[test]
    fn test_misplaced_example_detected() {
        let swapped = [EXAMPLES[1], EXAMPLES[0]];
        assert_eq!(
            check_tables(&[], &swapped, &CORE_CONCEPTS),
            Err(ContentError::MisplacedExample {
                slot: 0,
                found: ExampleKey::Jsx
            })
        );
    }

    #[test]
    fn test_duplicate_tab_detected() {
        let tabs = [ExampleKey::Jsx, ExampleKey::Jsx];
        assert_eq!(
            check_tables(&tabs, &EXAMPLES, &CORE_CONCEPTS),
            Err(ContentError::DuplicateTab(ExampleKey::Jsx))
        );
    }

    #[test]
    fn test_duplicate_concept_detected() {
        let concepts = [CORE_CONCEPTS[0], CORE_CONCEPTS[0]];
        let err = check_tables(&TAB_ORDER, &EXAMPLES, &concepts).unwrap_err();
        assert_eq!(err, ContentError::DuplicateConcept("Components"));
        assert_eq!(err.to_string(), "concept title 'Components' is used twice");
    }

    #[test]
    fn test_hotkeys_round_trip() {
        for key in ExampleKey::ALL {
            assert_eq!(ExampleKey::from_hotkey(key.hotkey()), Some(key));
        }
        assert_eq!(ExampleKey::from_hotkey('9'), None);
    }

    #[test]
    fn test_value_enum_names() {
        let key = ExampleKey::from_str("props", true).unwrap();
        assert_eq!(key, ExampleKey::Props);
        assert_eq!(ExampleKey::from_str("jsx", true).unwrap(), ExampleKey::Jsx);
    }
}

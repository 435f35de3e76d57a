//! Choice tree data model for selection dialogs.
//!
//! Selection dialogs walk a Category → Group → Choice hierarchy. The
//! tree flattens deterministically, in insertion order, to a linear
//! row sequence used for scroll math; only choice rows are selectable.

/// One selectable item.
///
/// Immutable once constructed; widgets borrow it for the duration of
/// one dialog invocation.
#[derive(Debug, Clone)]
pub struct Choice {
    /// Identifying name (stable key, matched by search).
    pub name: String,
    /// Display title.
    pub title: String,
    /// Optional long-form description, shown in the detail view.
    pub description: Option<String>,
    /// Start the cursor here.
    pub default_highlighted: bool,
    /// Pre-selected in radio/multi mode.
    pub default_selected: bool,
    /// Cannot be highlighted or selected.
    pub disabled: bool,
}

impl Choice {
    /// Create an enabled choice with no description.
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            description: None,
            default_highlighted: false,
            default_selected: false,
            disabled: false,
        }
    }

    /// Attach a long-form description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark as the default cursor position.
    #[must_use]
    pub const fn highlighted(mut self) -> Self {
        self.default_highlighted = true;
        self
    }

    /// Mark as pre-selected.
    #[must_use]
    pub const fn selected(mut self) -> Self {
        self.default_selected = true;
        self
    }

    /// Mark as disabled.
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// A named group of choices.
#[derive(Debug, Clone)]
pub struct ChoiceGroup {
    /// Identifying name.
    pub name: String,
    /// Display title.
    pub title: String,
    /// Member choices, in insertion order.
    pub choices: Vec<Choice>,
}

impl ChoiceGroup {
    /// Create a group from its choices.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        choices: Vec<Choice>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            choices,
        }
    }
}

/// The root of the choice tree.
#[derive(Debug, Clone)]
pub struct ChoiceCategory {
    /// Identifying name.
    pub name: String,
    /// Display title.
    pub title: String,
    /// Member groups, in insertion order.
    pub groups: Vec<ChoiceGroup>,
}

impl ChoiceCategory {
    /// Create a category from its groups.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        groups: Vec<ChoiceGroup>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            groups,
        }
    }

    /// Wrap a flat choice list in a single anonymous category/group.
    ///
    /// Most callers have no hierarchy; the selection dialog hides
    /// headers for anonymous nodes.
    pub fn flat(choices: Vec<Choice>) -> Self {
        Self::new("", "", vec![ChoiceGroup::new("", "", choices)])
    }

    /// Whether this is an anonymous wrapper from [`ChoiceCategory::flat`].
    pub fn is_anonymous(&self) -> bool {
        self.title.is_empty() && self.groups.iter().all(|g| g.title.is_empty())
    }
}

/// One row of the flattened tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlatRow {
    /// Category header; payload is the category index.
    Category(usize),
    /// Group header; payload is (category, group) indices.
    Group(usize, usize),
    /// A choice; payload is its index into the flat choice list.
    Choice(usize),
}

/// The flattened tree: rows for display, choices for selection math.
#[derive(Debug)]
pub struct FlatTree<'a> {
    /// Source categories.
    pub categories: &'a [ChoiceCategory],
    /// Display rows, one per header and per choice.
    pub rows: Vec<FlatRow>,
    /// Borrowed choices in flattening order.
    pub choices: Vec<&'a Choice>,
    /// For each flat choice, the (category, group) indices it came from.
    pub origin: Vec<(usize, usize)>,
    hide_headers: bool,
}

impl<'a> FlatTree<'a> {
    /// Flatten categories in insertion order.
    ///
    /// Anonymous wrapper nodes (empty titles) produce no header rows.
    pub fn new(categories: &'a [ChoiceCategory]) -> Self {
        let hide_headers = categories.iter().all(ChoiceCategory::is_anonymous);
        let mut rows = Vec::new();
        let mut choices = Vec::new();
        let mut origin = Vec::new();

        for (ci, cat) in categories.iter().enumerate() {
            if !hide_headers {
                rows.push(FlatRow::Category(ci));
            }
            for (gi, group) in cat.groups.iter().enumerate() {
                if !hide_headers {
                    rows.push(FlatRow::Group(ci, gi));
                }
                for choice in &group.choices {
                    rows.push(FlatRow::Choice(choices.len()));
                    choices.push(choice);
                    origin.push((ci, gi));
                }
            }
        }

        Self {
            categories,
            rows,
            choices,
            origin,
            hide_headers,
        }
    }

    /// Number of selectable choices.
    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Whether the tree has no choices at all.
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Whether header rows are suppressed (flat input).
    pub const fn headers_hidden(&self) -> bool {
        self.hide_headers
    }

    /// Whether at least one choice is enabled.
    pub fn any_enabled(&self) -> bool {
        self.choices.iter().any(|c| !c.disabled)
    }

    /// Index of the default cursor position: the first enabled choice
    /// flagged `default_highlighted`, else the first enabled choice.
    pub fn default_highlight(&self) -> Option<usize> {
        self.choices
            .iter()
            .position(|c| c.default_highlighted && !c.disabled)
            .or_else(|| self.choices.iter().position(|c| !c.disabled))
    }

    /// Indices of choices flagged `default_selected`.
    pub fn default_selected(&self) -> Vec<usize> {
        self.choices
            .iter()
            .enumerate()
            .filter(|(_, c)| c.default_selected && !c.disabled)
            .map(|(i, _)| i)
            .collect()
    }

    /// The display row holding flat choice `idx`.
    pub fn row_of_choice(&self, idx: usize) -> Option<usize> {
        self.rows.iter().position(|r| *r == FlatRow::Choice(idx))
    }

    /// Flat choice indices belonging to `(category, group)`.
    pub fn choices_in_group(&self, ci: usize, gi: usize) -> impl Iterator<Item = usize> + '_ {
        self.origin
            .iter()
            .enumerate()
            .filter(move |(_, &(c, g))| c == ci && g == gi)
            .map(|(i, _)| i)
    }

    /// Flat choice indices belonging to `category`.
    pub fn choices_in_category(&self, ci: usize) -> impl Iterator<Item = usize> + '_ {
        self.origin
            .iter()
            .enumerate()
            .filter(move |(_, &(c, _))| c == ci)
            .map(|(i, _)| i)
    }
}

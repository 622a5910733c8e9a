//! Personalization Wizard
//!
//! Three-step linear flow: pick a product, fill in its details, review and send.
//! Details are kept per category so fields of another product never leak into a message.

use crate::models::{Category, Item};

/// Rendered in place of an empty field
pub const PLACEHOLDER: &str = "-";

/// Wizard step, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WizardStep {
    ProductSelect,
    Details,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [
        WizardStep::ProductSelect,
        WizardStep::Details,
        WizardStep::Review,
    ];

    /// 1-based step number shown in the indicator
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::ProductSelect => 1,
            WizardStep::Details => 2,
            WizardStep::Review => 3,
        }
    }

    fn next(&self) -> Option<Self> {
        match self {
            WizardStep::ProductSelect => Some(WizardStep::Details),
            WizardStep::Details => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    fn previous(&self) -> Option<Self> {
        match self {
            WizardStep::ProductSelect => None,
            WizardStep::Details => Some(WizardStep::ProductSelect),
            WizardStep::Review => Some(WizardStep::Details),
        }
    }
}

/// Editable detail field. `Name` is the cover name, student name or honoree
/// depending on the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailField {
    Theme,
    Name,
    Age,
    Date,
    Grade,
    Subject,
}

/// Category-specific personalization details
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderDetails {
    Planner {
        theme: String,
        cover_name: String,
    },
    Notebook {
        theme: String,
        student_name: String,
        grade: String,
        subject: String,
    },
    PartyKit {
        theme: String,
        honoree: String,
        age: String,
        date: String,
    },
}

impl OrderDetails {
    pub fn blank(category: Category) -> Self {
        match category {
            Category::Planner => OrderDetails::Planner {
                theme: String::new(),
                cover_name: String::new(),
            },
            Category::Notebook => OrderDetails::Notebook {
                theme: String::new(),
                student_name: String::new(),
                grade: String::new(),
                subject: String::new(),
            },
            Category::PartyKit => OrderDetails::PartyKit {
                theme: String::new(),
                honoree: String::new(),
                age: String::new(),
                date: String::new(),
            },
        }
    }

    pub fn category(&self) -> Category {
        match self {
            OrderDetails::Planner { .. } => Category::Planner,
            OrderDetails::Notebook { .. } => Category::Notebook,
            OrderDetails::PartyKit { .. } => Category::PartyKit,
        }
    }

    /// Current value, `None` if this category has no such field
    pub fn field(&self, field: DetailField) -> Option<&str> {
        use DetailField::*;
        let value = match (self, field) {
            (OrderDetails::Planner { theme, .. }, Theme) => theme,
            (OrderDetails::Planner { cover_name, .. }, Name) => cover_name,
            (OrderDetails::Notebook { theme, .. }, Theme) => theme,
            (OrderDetails::Notebook { student_name, .. }, Name) => student_name,
            (OrderDetails::Notebook { grade, .. }, Grade) => grade,
            (OrderDetails::Notebook { subject, .. }, Subject) => subject,
            (OrderDetails::PartyKit { theme, .. }, Theme) => theme,
            (OrderDetails::PartyKit { honoree, .. }, Name) => honoree,
            (OrderDetails::PartyKit { age, .. }, Age) => age,
            (OrderDetails::PartyKit { date, .. }, Date) => date,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Field value or the placeholder when empty or missing
    pub fn display(&self, field: DetailField) -> &str {
        display_or_placeholder(self.field(field).unwrap_or(""))
    }

    /// Writes the field; ignored when this category has no such field
    pub fn set_field(&mut self, field: DetailField, value: String) {
        if let Some(slot) = self.field_mut(field) {
            *slot = value;
        }
    }

    /// Theme and name are required for every category
    pub fn is_complete(&self) -> bool {
        [DetailField::Theme, DetailField::Name]
            .iter()
            .all(|f| self.field(*f).is_some_and(|v| !v.trim().is_empty()))
    }

    fn field_mut(&mut self, field: DetailField) -> Option<&mut String> {
        use DetailField::*;
        match (self, field) {
            (OrderDetails::Planner { theme, .. }, Theme) => Some(theme),
            (OrderDetails::Planner { cover_name, .. }, Name) => Some(cover_name),
            (OrderDetails::Notebook { theme, .. }, Theme) => Some(theme),
            (OrderDetails::Notebook { student_name, .. }, Name) => Some(student_name),
            (OrderDetails::Notebook { grade, .. }, Grade) => Some(grade),
            (OrderDetails::Notebook { subject, .. }, Subject) => Some(subject),
            (OrderDetails::PartyKit { theme, .. }, Theme) => Some(theme),
            (OrderDetails::PartyKit { honoree, .. }, Name) => Some(honoree),
            (OrderDetails::PartyKit { age, .. }, Age) => Some(age),
            (OrderDetails::PartyKit { date, .. }, Date) => Some(date),
            _ => None,
        }
    }
}

/// Whitespace-only values count as empty, same as the details gate
pub fn display_or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() { PLACEHOLDER } else { value }
}

/// Selected item with the details collected for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub item: Item,
    pub details: OrderDetails,
}

impl Selection {
    fn new(item: Item) -> Self {
        Self {
            item,
            details: OrderDetails::blank(item.category),
        }
    }
}

/// One open wizard. Dropped on close; nothing survives a reopen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSession {
    step: WizardStep,
    selection: Option<Selection>,
}

impl WizardSession {
    /// Fresh session at step 1, optionally with an item already picked
    pub fn open(item: Option<Item>) -> Self {
        Self {
            step: WizardStep::ProductSelect,
            selection: item.map(Selection::new),
        }
    }

    /// Fresh session placed directly on the details step
    pub fn open_at_details(item: Item) -> Self {
        Self {
            step: WizardStep::Details,
            selection: Some(Selection::new(item)),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn selected_item(&self) -> Option<Item> {
        self.selection.as_ref().map(|s| s.item)
    }

    pub fn category(&self) -> Option<Category> {
        self.selected_item().map(|i| i.category)
    }

    pub fn details(&self) -> Option<&OrderDetails> {
        self.selection.as_ref().map(|s| &s.details)
    }

    /// Pick an item. Details survive only when the category stays the same.
    pub fn select(&mut self, item: Item) {
        match &mut self.selection {
            Some(current) if current.item.category == item.category => current.item = item,
            _ => self.selection = Some(Selection::new(item)),
        }
    }

    pub fn set_field(&mut self, field: DetailField, value: String) {
        if let Some(selection) = &mut self.selection {
            selection.details.set_field(field, value);
        }
    }

    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::ProductSelect => self.selection.is_some(),
            WizardStep::Details => self.details().map_or(true, OrderDetails::is_complete),
            WizardStep::Review => false,
        }
    }

    /// Returns whether the step changed
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Steps back without touching entered details
    pub fn retreat(&mut self) -> bool {
        match self.step.previous() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.category() {
            Some(Category::PartyKit) => "Orçamento de Festa",
            _ => "Personalize seu Pedido",
        }
    }

    /// Label/value pairs shown on the review step
    pub fn review_rows(&self) -> Vec<(&'static str, String)> {
        let Some(selection) = &self.selection else {
            return vec![("Produto:", PLACEHOLDER.to_string())];
        };
        let d = &selection.details;
        let mut rows = vec![("Produto:", selection.item.name.to_string())];
        let fields: &[(&'static str, DetailField)] = match d.category() {
            Category::PartyKit => &[
                ("Tema:", DetailField::Theme),
                ("Aniversariante:", DetailField::Name),
                ("Data:", DetailField::Date),
            ],
            Category::Planner => &[
                ("Tema:", DetailField::Theme),
                ("Nome Capa:", DetailField::Name),
            ],
            Category::Notebook => &[
                ("Tema:", DetailField::Theme),
                ("Aluno:", DetailField::Name),
                ("Turma:", DetailField::Grade),
            ],
        };
        rows.extend(fields.iter().map(|(label, f)| (*label, d.display(*f).to_string())));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{NOTEBOOK_TILE, PARTY_KITS, PARTY_KIT_TILE, PLANNERS, PLANNER_TILE};

    fn filled_party_session() -> WizardSession {
        let mut s = WizardSession::open(Some(PARTY_KIT_TILE));
        assert!(s.advance());
        s.set_field(DetailField::Name, "Miguel".into());
        s.set_field(DetailField::Theme, "Safari".into());
        s
    }

    #[test]
    fn test_open_resets_everything() {
        let mut s = filled_party_session();
        assert!(s.advance());
        assert_eq!(s.step(), WizardStep::Review);

        let reopened = WizardSession::open(Some(PARTY_KIT_TILE));
        assert_eq!(reopened.step(), WizardStep::ProductSelect);
        assert_eq!(reopened.details(), Some(&OrderDetails::blank(Category::PartyKit)));

        let empty = WizardSession::open(None);
        assert_eq!(empty.step(), WizardStep::ProductSelect);
        assert!(empty.selection().is_none());
    }

    #[test]
    fn test_step_one_requires_selection() {
        let mut s = WizardSession::open(None);
        assert!(!s.can_advance());
        assert!(!s.advance());
        assert_eq!(s.step(), WizardStep::ProductSelect);

        s.select(PLANNER_TILE);
        assert!(s.can_advance());
        assert!(s.advance());
        assert_eq!(s.step(), WizardStep::Details);
    }

    #[test]
    fn test_party_kit_details_gate() {
        let mut s = WizardSession::open(Some(PARTY_KIT_TILE));
        s.advance();
        s.set_field(DetailField::Name, "Miguel".into());
        s.set_field(DetailField::Theme, "".into());
        assert!(!s.can_advance());
        s.set_field(DetailField::Theme, "   ".into());
        assert!(!s.can_advance());
        s.set_field(DetailField::Theme, "Safari".into());
        assert!(s.can_advance());
        s.set_field(DetailField::Name, "\t".into());
        assert!(!s.can_advance());
    }

    #[test]
    fn test_notebook_and_planner_details_gate() {
        let mut s = WizardSession::open(Some(NOTEBOOK_TILE));
        s.advance();
        s.set_field(DetailField::Theme, "Unicórnio".into());
        s.set_field(DetailField::Grade, "5º Ano B".into());
        assert!(!s.can_advance());
        s.set_field(DetailField::Name, "João Pedro".into());
        assert!(s.can_advance());

        let mut p = WizardSession::open(Some(PLANNERS[0]));
        p.advance();
        p.set_field(DetailField::Name, "Dra. Ana Silva".into());
        assert!(!p.can_advance());
        p.set_field(DetailField::Theme, "Floral".into());
        assert!(p.advance());
        assert_eq!(p.step(), WizardStep::Review);
    }

    #[test]
    fn test_review_is_terminal_for_advance() {
        let mut s = filled_party_session();
        assert!(s.advance());
        assert!(!s.can_advance());
        assert!(!s.advance());
        assert_eq!(s.step(), WizardStep::Review);
    }

    #[test]
    fn test_retreat_keeps_details() {
        let mut s = filled_party_session();
        assert!(s.retreat());
        assert_eq!(s.step(), WizardStep::ProductSelect);
        assert!(!s.retreat());
        assert_eq!(s.details().and_then(|d| d.field(DetailField::Name)), Some("Miguel"));

        // Reselecting within the same category keeps what was typed
        s.select(PARTY_KITS[1]);
        assert_eq!(s.details().and_then(|d| d.field(DetailField::Theme)), Some("Safari"));
        assert_eq!(s.selected_item(), Some(PARTY_KITS[1]));
    }

    #[test]
    fn test_switching_category_starts_blank_details() {
        let mut s = filled_party_session();
        s.retreat();
        s.select(NOTEBOOK_TILE);
        assert_eq!(s.details(), Some(&OrderDetails::blank(Category::Notebook)));
        assert_eq!(s.details().and_then(|d| d.field(DetailField::Age)), None);
    }

    #[test]
    fn test_fields_outside_category_are_ignored() {
        let mut s = WizardSession::open(Some(PLANNER_TILE));
        s.set_field(DetailField::Subject, "Matemática".into());
        assert_eq!(s.details(), Some(&OrderDetails::blank(Category::Planner)));
    }

    #[test]
    fn test_open_at_details_skips_product_step() {
        let s = WizardSession::open_at_details(PARTY_KITS[2]);
        assert_eq!(s.step(), WizardStep::Details);
        assert_eq!(s.selected_item(), Some(PARTY_KITS[2]));
        assert_eq!(s.title(), "Orçamento de Festa");
        assert!(!s.can_advance());
    }

    #[test]
    fn test_party_kit_scenario_review_rows() {
        let mut s = WizardSession::open(None);
        assert!(!s.advance());
        s.select(PARTY_KIT_TILE);
        assert!(s.advance());
        assert!(!s.advance());
        s.set_field(DetailField::Name, "Miguel".into());
        assert!(!s.advance());
        s.set_field(DetailField::Theme, "Safari".into());
        assert!(s.advance());
        assert_eq!(s.step(), WizardStep::Review);

        let rows = s.review_rows();
        assert_eq!(
            rows,
            vec![
                ("Produto:", "Kit Festa Personalizado".to_string()),
                ("Tema:", "Safari".to_string()),
                ("Aniversariante:", "Miguel".to_string()),
                ("Data:", "-".to_string()),
            ]
        );
    }

    #[test]
    fn test_review_rows_treat_whitespace_as_empty() {
        let mut s = WizardSession::open(Some(NOTEBOOK_TILE));
        s.advance();
        s.set_field(DetailField::Theme, "Unicórnio".into());
        s.set_field(DetailField::Name, "João Pedro".into());
        s.set_field(DetailField::Grade, "   ".into());
        assert!(s.advance());

        let rows = s.review_rows();
        assert_eq!(rows[3], ("Turma:", "-".to_string()));
        assert_eq!(s.details().map(|d| d.display(DetailField::Grade)), Some("-"));
    }

    #[test]
    fn test_step_numbers() {
        let numbers: Vec<u8> = WizardStep::ALL.iter().map(WizardStep::number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }
}

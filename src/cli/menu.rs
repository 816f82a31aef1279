use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

pub const MENU_TITLE: &str = "============== Fridge and Cookbook Manager ==============";
const FRIDGE_SECTION: &str = " - Manage items in the fridge - ";
const COOKBOOK_SECTION: &str = " - Cookbook - ";

/// Numbered entries of the main menu.
///
/// The static name (`show_items`, `add_item`, ...) labels the tracing span of
/// each command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum MenuOption {
    ShowItems = 1,
    AddItem = 2,
    RemoveItem = 3,
    SearchItem = 4,
    ShowItemsByDate = 5,
    ShowExpired = 6,
    ShowTotalValue = 7,
    ShowAllRecipes = 8,
    ExpandRecipe = 9,
    AddRecipe = 10,
    RemoveRecipe = 11,
    CheckRecipe = 12,
    SuggestRecipes = 13,
    Exit = 14,
}

impl MenuOption {
    pub fn value(self) -> i64 {
        self as i64
    }

    pub fn description(self) -> &'static str {
        match self {
            MenuOption::ShowItems => "Show items in the fridge",
            MenuOption::AddItem => "Add new item",
            MenuOption::RemoveItem => "Remove item",
            MenuOption::SearchItem => "Search for an item",
            MenuOption::ShowItemsByDate => "Show list of items by date",
            MenuOption::ShowExpired => "Show expired items",
            MenuOption::ShowTotalValue => "Show total value in the fridge",
            MenuOption::ShowAllRecipes => "Show all recipes",
            MenuOption::ExpandRecipe => "Expand a recipe",
            MenuOption::AddRecipe => "Add new recipe",
            MenuOption::RemoveRecipe => "Remove recipe",
            MenuOption::CheckRecipe => "Check if a recipe can be made from items in fridge",
            MenuOption::SuggestRecipes => "Suggest recipes from items in fridge",
            MenuOption::Exit => "End program",
        }
    }

    pub fn from_value(value: i64) -> Option<Self> {
        Self::iter().find(|option| option.value() == value)
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    fn starts_cookbook_section(self) -> bool {
        self == MenuOption::ShowAllRecipes
    }
}

/// The full menu text, one line per entry, ending with a newline.
pub fn render_menu() -> String {
    let mut out = String::new();
    out.push_str(MENU_TITLE);
    out.push('\n');
    out.push_str(FRIDGE_SECTION);
    out.push('\n');
    for option in MenuOption::iter() {
        if option.starts_cookbook_section() {
            out.push('\n');
            out.push_str(COOKBOOK_SECTION);
            out.push('\n');
        }
        out.push_str(&format!("{}. {}\n", option.value(), option.description()));
    }
    out
}

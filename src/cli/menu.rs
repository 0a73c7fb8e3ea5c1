#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Remove,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Add),
            "2" => Some(MenuChoice::List),
            "3" => Some(MenuChoice::Remove),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub const MENU_OPTIONS: [&str; 4] = [
    "1 - Add new product",
    "2 - List products",
    "3 - Remove product",
    "4 - Exit",
];

pub const MENU_PROMPT: &str = "Choose an option (1-4): ";

use std::io::{self, BufRead, Stdout, StdinLock, Write};
use tracing::{debug, warn};
use crate::inventory::{self, InventoryError, OperationResult};
use crate::metadata::{Catalog, MAX_PRODUCTS};
use crate::storage::Store;
use super::console::Console;
use super::display::{display_error, display_result};
use super::menu::{MenuChoice, MENU_OPTIONS, MENU_PROMPT};

/// Interactive menu loop owning the catalog for the session.
pub struct Cli<R, W> {
    catalog: Catalog,
    store: Store,
    console: Console<R, W>,
}

impl Cli<StdinLock<'static>, Stdout> {
    pub fn stdio(store: Store) -> io::Result<Self> {
        Cli::new(store, Console::stdio())
    }
}

impl<R: BufRead, W: Write> Cli<R, W> {
    pub fn new(store: Store, mut console: Console<R, W>) -> io::Result<Self> {
        let catalog = inventory::open_catalog(&store, &mut console)?;
        debug!(path = %store.path().display(), products = catalog.len(), "session started");
        Ok(Cli {
            catalog,
            store,
            console,
        })
    }

    /// Runs until the operator picks exit. Returns an error only when the
    /// console itself fails, e.g. input is closed at the menu prompt.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.show_menu()?;

            let input = match self.console.prompt(MENU_PROMPT) {
                Ok(input) => input,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Err(e),
                Err(e) => {
                    warn!(error = %e, "failed to read menu choice");
                    self.console.say("Error reading input")?;
                    continue;
                }
            };

            match MenuChoice::parse(&input) {
                Some(MenuChoice::Add) => {
                    let outcome =
                        inventory::add_product(&mut self.catalog, &self.store, &mut self.console);
                    self.report(outcome)?;
                }
                Some(MenuChoice::List) => {
                    let listing = inventory::list_products(&self.catalog);
                    display_result(&mut self.console, &listing)?;
                }
                Some(MenuChoice::Remove) => {
                    let outcome =
                        inventory::remove_product(&mut self.catalog, &self.store, &mut self.console);
                    self.report(outcome)?;
                }
                Some(MenuChoice::Exit) => {
                    self.console.say("\nSaving data and exiting... Goodbye!")?;
                    return Ok(());
                }
                None => {
                    self.console.say("\nInvalid option. Please enter a number from 1 to 4.")?;
                }
            }
        }
    }

    fn show_menu(&mut self) -> io::Result<()> {
        self.console.say(format!("\n--- STOCK MANAGER (LIMIT: {}) ---", MAX_PRODUCTS))?;
        for option in MENU_OPTIONS {
            self.console.say(option)?;
        }
        Ok(())
    }

    /// Handler boundary: every operation error ends here as a message.
    fn report(&mut self, outcome: Result<OperationResult, InventoryError>) -> io::Result<()> {
        match outcome {
            Ok(result) => display_result(&mut self.console, &result),
            Err(e) => {
                if !e.is_rejection() {
                    warn!(error = %e, "operation aborted by input failure");
                }
                display_error(&mut self.console, &e)
            }
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn console(&self) -> &Console<R, W> {
        &self.console
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }
}

//! Menu loop: prompt, parse, call the catalog service, report.
//!
//! Every outcome is reported to the operator and the loop continues; only end
//! of input or option `0` stops it.

use std::io::{BufRead, Write};

use anyhow::Context;
use rust_decimal::Decimal;
use tracing::{debug, info};

use stockroom_core::{DomainResult, ProductId};
use stockroom_infra::{ProductCatalogService, ProductRepository};
use stockroom_products::Product;

use crate::input;

/// Menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Create,
    Find,
    List,
    Update,
    Delete,
    Exit,
}

impl MenuOption {
    /// `None` for anything that is not a menu number.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(Self::Create),
            "2" => Some(Self::Find),
            "3" => Some(Self::List),
            "4" => Some(Self::Update),
            "5" => Some(Self::Delete),
            "0" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// One full set of product fields as typed by the operator.
#[derive(Debug)]
struct ProductForm {
    id: ProductId,
    name: String,
    description: String,
    price: Decimal,
    stock_quantity: i32,
}

struct FormLabels {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: &'static str,
    stock_quantity: &'static str,
}

const CREATE_LABELS: FormLabels = FormLabels {
    id: "ID: ",
    name: "Name: ",
    description: "Description: ",
    price: "Price: ",
    stock_quantity: "Quantity in stock: ",
};

const UPDATE_LABELS: FormLabels = FormLabels {
    id: "Product ID: ",
    name: "New name: ",
    description: "New description: ",
    price: "New price: ",
    stock_quantity: "New quantity in stock: ",
};

/// Unwraps one prompted field inside `read_form`: end of input and parse
/// failures both end the form early.
macro_rules! field {
    ($read:expr) => {
        match $read {
            None => return Ok(None),
            Some(Err(e)) => return Ok(Some(Err(e))),
            Some(Ok(value)) => value,
        }
    };
}

/// Interactive console over any line source and sink.
pub struct Console<R, W, Repo> {
    input: R,
    output: W,
    service: ProductCatalogService<Repo>,
}

impl<R, W, Repo> Console<R, W, Repo>
where
    R: BufRead,
    W: Write,
    Repo: ProductRepository,
{
    pub fn new(input: R, output: W, service: ProductCatalogService<Repo>) -> Self {
        Self {
            input,
            output,
            service,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the operator exits or input ends.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.say("========================================")?;
        self.say("   Product Management System")?;
        self.say("========================================")?;

        loop {
            self.print_menu()?;
            let Some(raw) = self.read_line()? else {
                debug!("input closed");
                break;
            };

            let flow = match MenuOption::parse(&raw) {
                Some(option) => {
                    debug!(?option, "menu option selected");
                    self.dispatch(option)?
                }
                None => {
                    self.say("\nInvalid option! Try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.say("\nThanks for using the system!")?;
        info!("console session finished");
        Ok(())
    }

    fn dispatch(&mut self, option: MenuOption) -> anyhow::Result<Flow> {
        match option {
            MenuOption::Create => self.create_product(),
            MenuOption::Find => self.find_product(),
            MenuOption::List => self.list_products(),
            MenuOption::Update => self.update_product(),
            MenuOption::Delete => self.delete_product(),
            MenuOption::Exit => Ok(Flow::Exit),
        }
    }

    fn print_menu(&mut self) -> anyhow::Result<()> {
        self.say("\n--- Main Menu ---")?;
        self.say("1. Create product")?;
        self.say("2. Find product by ID")?;
        self.say("3. List all products")?;
        self.say("4. Update product")?;
        self.say("5. Delete product")?;
        self.say("0. Exit")?;
        self.ask("\nChoose an option: ")
    }

    fn create_product(&mut self) -> anyhow::Result<Flow> {
        self.say("\n--- Create Product ---")?;
        let Some(form) = self.read_form(&CREATE_LABELS)? else {
            return Ok(Flow::Exit);
        };

        let result = form.and_then(|f| {
            self.service
                .create_product(f.id, &f.name, &f.description, f.price, f.stock_quantity)
        });
        match result {
            Ok(_) => self.say("\n✓ Product created successfully!")?,
            Err(e) => self.say(&format!("\n✗ Error creating product: {e}"))?,
        }
        Ok(Flow::Continue)
    }

    fn find_product(&mut self) -> anyhow::Result<Flow> {
        self.say("\n--- Find Product ---")?;
        let id = match self.prompt_with("Product ID: ", input::parse_id)? {
            None => return Ok(Flow::Exit),
            Some(Err(e)) => {
                self.say(&format!("\n✗ Error finding product: {e}"))?;
                return Ok(Flow::Continue);
            }
            Some(Ok(id)) => id,
        };

        match self.service.find_product(id) {
            Some(product) => self.show(&product)?,
            None => self.say("\n✗ Product not found!")?,
        }
        Ok(Flow::Continue)
    }

    fn list_products(&mut self) -> anyhow::Result<Flow> {
        self.say("\n--- Product List ---")?;
        let products = self.service.list_products();

        if products.is_empty() {
            self.say("No products registered.")?;
        }
        for product in &products {
            self.show(product)?;
        }
        Ok(Flow::Continue)
    }

    fn update_product(&mut self) -> anyhow::Result<Flow> {
        self.say("\n--- Update Product ---")?;
        let Some(form) = self.read_form(&UPDATE_LABELS)? else {
            return Ok(Flow::Exit);
        };

        let result = form.and_then(|f| {
            self.service
                .update_product(f.id, &f.name, &f.description, f.price, f.stock_quantity)
        });
        match result {
            Ok(_) => self.say("\n✓ Product updated successfully!")?,
            Err(e) => self.say(&format!("\n✗ Error updating product: {e}"))?,
        }
        Ok(Flow::Continue)
    }

    fn delete_product(&mut self) -> anyhow::Result<Flow> {
        self.say("\n--- Delete Product ---")?;
        let Some(id) = self.prompt_with("Product ID: ", input::parse_id)? else {
            return Ok(Flow::Exit);
        };

        match id.and_then(|id| self.service.delete_product(id)) {
            Ok(()) => self.say("\n✓ Product deleted successfully!")?,
            Err(e) => self.say(&format!("\n✗ Error deleting product: {e}"))?,
        }
        Ok(Flow::Continue)
    }

    /// `Ok(None)` on end of input; `Ok(Some(Err(_)))` at the first field that
    /// does not parse (remaining fields are not asked for).
    fn read_form(
        &mut self,
        labels: &FormLabels,
    ) -> anyhow::Result<Option<DomainResult<ProductForm>>> {
        let id = field!(self.prompt_with(labels.id, input::parse_id)?);
        let name = field!(self.prompt_with(labels.name, input::parse_text)?);
        let description = field!(self.prompt_with(labels.description, input::parse_text)?);
        let price = field!(self.prompt_with(labels.price, input::parse_price)?);
        let stock_quantity =
            field!(self.prompt_with(labels.stock_quantity, input::parse_quantity)?);

        Ok(Some(Ok(ProductForm {
            id,
            name,
            description,
            price,
            stock_quantity,
        })))
    }

    fn prompt_with<T>(
        &mut self,
        label: &str,
        parse: fn(&str) -> DomainResult<T>,
    ) -> anyhow::Result<Option<DomainResult<T>>> {
        self.ask(label)?;
        Ok(self.read_line()?.map(|raw| parse(&raw)))
    }

    fn show(&mut self, product: &Product) -> anyhow::Result<()> {
        self.say(&format!("\n{product}"))
    }

    fn say(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{line}").context("failed to write to console")
    }

    fn ask(&mut self, prompt: &str) -> anyhow::Result<()> {
        write!(self.output, "{prompt}").context("failed to write to console")?;
        self.output.flush().context("failed to flush console")
    }

    /// Next trimmed input line, or `None` once input is exhausted.
    fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from console")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

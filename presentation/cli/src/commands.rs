use clap::Subcommand;

use business::domain::cart::service::CartService;
use business::domain::product::value_objects::ProductId;

use crate::catalog::source::{Catalog, CatalogError};
use crate::screens::badge::CartBadge;
use crate::screens::{cart_list, catalog_list, product_detail};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the catalog with the cart badge
    Catalog,
    /// Show one product's details
    Show {
        /// Product identifier
        id: String,
    },
    /// Show the cart
    Cart,
    /// Add one unit of a product to the cart
    Add {
        /// Product identifier
        id: String,
    },
    /// Increase the quantity of a product already in the cart
    Increase {
        /// Product identifier
        id: String,
    },
    /// Decrease the quantity of a product, removing it at zero
    Decrease {
        /// Product identifier
        id: String,
    },
    /// Remove a product from the cart
    Remove {
        /// Product identifier
        id: String,
    },
    /// Empty the cart
    Clear,
}

/// Runs one command against the cart and returns the screen to print.
pub fn execute(
    command: &Command,
    cart: &dyn CartService,
    catalog: &Catalog,
    badge: &CartBadge,
) -> Result<String, CatalogError> {
    let output = match command {
        Command::Catalog => catalog_list::render(catalog.products(), &cart.snapshot(), badge),
        Command::Show { id } => product_detail::render(catalog.find(id)?, &cart.snapshot()),
        Command::Cart => cart_list::render(&cart.snapshot()),
        Command::Add { id } => {
            let product = catalog.find(id)?;
            let snapshot = cart.add(product);
            format!(
                "{} was added to the cart!\n\n{}",
                product.name,
                cart_list::render(&snapshot)
            )
        }
        Command::Increase { id } => {
            cart_list::render(&cart.increase_quantity(&ProductId::new(id.as_str())?))
        }
        Command::Decrease { id } => {
            cart_list::render(&cart.decrease_quantity(&ProductId::new(id.as_str())?))
        }
        Command::Remove { id } => cart_list::render(&cart.remove(&ProductId::new(id.as_str())?)),
        Command::Clear => cart_list::render(&cart.clear()),
    };
    Ok(output)
}

//! Command handlers.
//!
//! Each handler receives the [`Shop`] it operates on; the cart is an owned
//! value threaded through explicitly rather than shared global state.

pub mod cart;
pub mod catalog;
pub mod checkout;

use shopfront_cart::{CartStore, CatalogClient, FileStore, ShopConfig};

/// Everything a command needs: configuration, the cart and the catalog.
pub struct Shop {
    pub config: ShopConfig,
    pub cart: CartStore<FileStore>,
    pub catalog: CatalogClient,
}

impl Shop {
    /// Load the persisted cart and set up the catalog client.
    pub fn open(config: ShopConfig) -> Self {
        let cart = CartStore::load(FileStore::new(&config.data_dir));
        let catalog = CatalogClient::new(&config.catalog);
        Self {
            config,
            cart,
            catalog,
        }
    }
}

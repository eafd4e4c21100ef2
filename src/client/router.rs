use dioxus::prelude::*;

use crate::client::{
    components::AppLayout,
    routes::{
        account::{Dashboard, SignIn},
        blog::{Blog, BlogPage},
        dynamic::DynamicRoute,
        shop::{Cart, Checkout, CheckoutConfirmation, ResetPassword},
        Home,
    },
};

/// Storefront route table
///
/// Static routes match exactly. Anything else falls through to [`DynamicRoute`], which
/// asks the server what content lives at the path.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]

    #[route("/")]
    Home {},

    #[route("/blog")]
    Blog {},

    #[route("/blog/:page")]
    BlogPage { page: u64 },

    #[route("/cart")]
    Cart {},

    #[route("/checkout")]
    Checkout {},

    #[route("/checkout/confirmation")]
    CheckoutConfirmation {},

    #[route("/reset-password")]
    ResetPassword {},

    #[route("/account")]
    Dashboard {},

    #[route("/sign-in")]
    SignIn {},

    #[route("/:..segments")]
    DynamicRoute { segments: Vec<String> },
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn parse(path: &str) -> Route {
        Route::from_str(path).unwrap_or_else(|_| panic!("{path} should parse"))
    }

    #[test]
    fn static_paths_map_to_their_pages() {
        let table = [
            ("/", Route::Home {}),
            ("/blog", Route::Blog {}),
            ("/blog/2", Route::BlogPage { page: 2 }),
            ("/cart", Route::Cart {}),
            ("/checkout", Route::Checkout {}),
            ("/checkout/confirmation", Route::CheckoutConfirmation {}),
            ("/reset-password", Route::ResetPassword {}),
            ("/account", Route::Dashboard {}),
            ("/sign-in", Route::SignIn {}),
        ];

        for (path, expected) in table {
            assert_eq!(parse(path), expected, "{path}");
        }
    }

    #[test]
    fn unmapped_paths_fall_through_to_dynamic_route() {
        assert_eq!(
            parse("/fusion-backpack.html"),
            Route::DynamicRoute {
                segments: vec!["fusion-backpack.html".to_string()]
            }
        );
        assert_eq!(
            parse("/women/tops"),
            Route::DynamicRoute {
                segments: vec!["women".to_string(), "tops".to_string()]
            }
        );
    }

    #[test]
    fn static_routes_render_their_paths() {
        assert_eq!(Route::Cart {}.to_string(), "/cart");
        assert_eq!(Route::BlogPage { page: 3 }.to_string(), "/blog/3");
    }
}

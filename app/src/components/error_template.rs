//! Renders routing errors, such as a path the header does not link to.
//!
//! On the server the first error also decides the HTTP status of the
//! response.

use http::status::StatusCode;
use leptos::{
    html::{div, h1, p},
    prelude::*,
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Collects the `AppError`s out of a Leptos `Errors` map.
#[must_use]
pub fn app_errors(errors: Errors) -> Vec<AppError> {
    errors
        .into_iter()
        .filter_map(|(_key, err)| err.downcast_ref::<AppError>().cloned())
        .collect()
}

/// Renders an error page for `errors`.
pub fn component(errors: Errors) -> impl IntoView {
    let errors = app_errors(errors);

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    div().class("grid place-content-center px-4 h-full antialiased text-center").child((
        h1().class("mb-6").child(if errors.len() > 1 { "Errors" } else { "Error" }),
        errors
            .into_iter()
            .map(|error| {
                p().class("text-xl tracking-widest text-gray-400 uppercase")
                    .child(format!("{}| {error}", error.status_code()))
            })
            .collect_view(),
        div().class("mt-6 duration-200 hover:text-[#ffef5c]").child(A(AProps::builder()
            .href("/")
            .children(ToChildren::to_children(|| "Go back home"))
            .build())),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.to_string(), "Not Found");
    }

    #[test]
    fn collects_only_app_errors() {
        let mut errors = Errors::default();
        errors.insert_with_default_key(AppError::NotFound);
        assert_eq!(app_errors(errors), vec![AppError::NotFound]);
        assert!(app_errors(Errors::default()).is_empty());
    }
}

pub mod identity_provider_impl;

pub use identity_provider_impl::PgIdentityProvider;

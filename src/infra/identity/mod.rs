pub mod jwt_identity_provider;

pub mod revocation_query_service_impl;

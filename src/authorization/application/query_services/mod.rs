pub mod authorization_query_service_impl;

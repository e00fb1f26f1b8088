pub mod principal_catalog_page_resource;

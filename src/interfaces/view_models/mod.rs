pub mod scatter_view_model;

use crate::error::AppError;
use async_trait::async_trait;
use reqwest::multipart::Form;
use serde_json::Value;

/// Interface for the project, material and line item endpoints
#[async_trait]
pub trait ProjectService: Send + Sync {
    /// Gets a project
    async fn get_project(&self, project_id: &str) -> Result<Value, AppError>;

    /// Creates a material from a JSON body
    async fn create_material(&self, data: Value) -> Result<Value, AppError>;

    /// Creates a material from a multipart form, e.g. when uploading a file
    async fn create_material_form(&self, form: Form) -> Result<Value, AppError>;

    /// Gets the materials of a project
    ///
    /// # Returns
    /// * The `materials` field when the reply carries one, the whole reply otherwise
    async fn get_materials(&self, project_id: &str) -> Result<Value, AppError>;

    /// Updates a material from a JSON body
    async fn update_material(&self, update_id: &str, data: Value) -> Result<Value, AppError>;

    /// Updates a material from a multipart form
    async fn update_material_form(&self, update_id: &str, form: Form)
    -> Result<Value, AppError>;

    /// Deletes a material
    async fn delete_material(&self, material_id: &str) -> Result<Value, AppError>;

    /// Updates a line item
    async fn update_line_item(&self, data: Value) -> Result<Value, AppError>;

    /// Duplicates a line item
    async fn duplicate_line_item(&self, id: &str) -> Result<Value, AppError>;

    /// Deletes a line item
    async fn delete_line_item(&self, line_item_id: &str) -> Result<Value, AppError>;

    /// Gets the line items of a project together with their materials
    ///
    /// # Returns
    /// * The `lineItemsWithMaterials` field when present, the whole reply otherwise
    async fn get_line_items_with_materials(&self, project_id: &str) -> Result<Value, AppError>;

    /// Gets the public projects
    ///
    /// # Returns
    /// * The `projects` field when present, the whole reply otherwise
    async fn get_public_projects(&self) -> Result<Value, AppError>;

    /// Creates a project
    ///
    /// When the reply carries a `project`, the navigator is sent to
    /// `Design Project` with the project's `id`.
    async fn new_project(&self, data: Value) -> Result<Value, AppError>;
}

use diesel::prelude::*;
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Recipe {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub time: String,
    pub description: String,
    pub ingredients: String,
    pub directions: String,
}

/// Insertable row. `id: None` lets the database default assign one;
/// seed rows may carry an id from the seed file.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub id: Option<Uuid>,
    pub name: &'a str,
    pub image_url: &'a str,
    pub time: &'a str,
    pub description: &'a str,
    pub ingredients: &'a str,
    pub directions: &'a str,
}

/// Overwrites all six fields together; the id is never changed.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::recipes)]
pub struct RecipeChangeset<'a> {
    pub name: &'a str,
    pub image_url: &'a str,
    pub time: &'a str,
    pub description: &'a str,
    pub ingredients: &'a str,
    pub directions: &'a str,
}

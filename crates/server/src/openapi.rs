use axum::Json;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct StatusDoc { pub status: String }

#[derive(ToSchema)]
pub struct BrandDoc { pub id: i32, pub name: String, pub description: String, pub country: String }

#[derive(ToSchema)]
pub struct CreateBrandDoc { pub name: String, pub description: String, pub country: String }

#[derive(ToSchema)]
pub struct UpdateBrandDoc {
    pub name: Option<String>,
    pub description: Option<String>,
    pub country: Option<String>,
}

/// A stored bike without its brand.
#[derive(ToSchema)]
pub struct BikeRowDoc {
    pub id: i32,
    pub brand_id: i32,
    pub model: String,
    pub year: i32,
    pub description: Option<String>,
}

/// A bike with its resolved brand; `brand` is null once the brand is gone.
#[derive(ToSchema)]
pub struct BikeDoc {
    pub id: i32,
    pub brand_id: i32,
    pub model: String,
    pub year: i32,
    pub description: Option<String>,
    pub brand: Option<BrandDoc>,
}

#[derive(ToSchema)]
pub struct CreateBikeDoc {
    pub brand_id: i32,
    pub model: String,
    pub year: i32,
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct UpdateBikeDoc {
    pub brand_id: Option<i32>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub description: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::bikes::list,
        crate::routes::bikes::create,
        crate::routes::bikes::get,
        crate::routes::bikes::update,
        crate::routes::bikes::delete,
        crate::routes::brands::list,
        crate::routes::brands::create,
        crate::routes::brands::get,
        crate::routes::brands::update,
        crate::routes::brands::delete,
        crate::routes::brands::list_bikes,
    ),
    components(
        schemas(
            HealthResponse,
            StatusDoc,
            BrandDoc,
            CreateBrandDoc,
            UpdateBrandDoc,
            BikeRowDoc,
            BikeDoc,
            CreateBikeDoc,
            UpdateBikeDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "bikes"),
        (name = "brands")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

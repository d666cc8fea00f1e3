use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::dto::products::{
    ProductDeletedResponse, ProductListResponse, ProductMessageResponse, ProductResponse,
};
use crate::forms::products::{CreateProductForm, UpdateProductForm};
use crate::repository::DieselRepository;
use crate::routes::service_error_response;
use crate::services::products::{
    ProductListParams, create_product as create_product_service,
    delete_product as delete_product_service, get_product as get_product_service,
    list_products as list_products_service, update_product as update_product_service,
};

#[get("")]
pub async fn list_products(
    params: web::Query<ProductListParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match list_products_service(&params, repo.get_ref()) {
        Ok((products, pagination)) => HttpResponse::Ok().json(ProductListResponse {
            success: true,
            products: products.into_iter().map(Into::into).collect(),
            pagination,
        }),
        Err(err) => service_error_response(err, "fetching products"),
    }
}

#[get("/{id}")]
pub async fn get_product(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match get_product_service(&id, repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(ProductResponse {
            success: true,
            data: product.into(),
        }),
        Err(err) => service_error_response(err, "fetching product"),
    }
}

#[post("")]
pub async fn create_product(
    form: web::Json<CreateProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match create_product_service(form.into_inner(), repo.get_ref()) {
        Ok(product) => HttpResponse::Created().json(ProductMessageResponse {
            success: true,
            message: "Product created successfully".to_string(),
            data: product.into(),
        }),
        Err(err) => service_error_response(err, "creating product"),
    }
}

#[put("/{id}")]
pub async fn update_product(
    id: web::Path<String>,
    form: web::Json<UpdateProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match update_product_service(&id, form.into_inner(), repo.get_ref()) {
        Ok(product) => HttpResponse::Ok().json(ProductMessageResponse {
            success: true,
            message: "Product updated successfully".to_string(),
            data: product.into(),
        }),
        Err(err) => service_error_response(err, "updating product"),
    }
}

#[delete("/{id}")]
pub async fn delete_product(
    id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match delete_product_service(&id, repo.get_ref()) {
        Ok(deleted) => HttpResponse::Ok().json(ProductDeletedResponse {
            success: true,
            message: format!("Product \"{}\" deleted successfully", deleted.name),
            data: deleted.into(),
        }),
        Err(err) => service_error_response(err, "deleting product"),
    }
}

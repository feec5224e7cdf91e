use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Products,
    Reviews,
    Cart,
    Auth,
    Users,
}

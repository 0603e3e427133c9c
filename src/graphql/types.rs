//! Object types over the catalog records. Scalars map straight from row fields; relations
//! delegate to the services in the schema data.

use super::node::encode_global_id;
use crate::model::*;
use crate::query::FindArgs;
use crate::service::Services;
use async_graphql::{Context, Interface, Object, Result, ID};
use chrono::{DateTime, Utc};

fn services<'a>(ctx: &Context<'a>) -> Result<&'a Services> {
    ctx.data::<Services>()
}

/// Objects resolvable through `node(id:)`.
#[derive(Interface)]
#[graphql(field(name = "id", ty = "ID"))]
pub enum Node {
    Location(Location),
    Material(Material),
    IpProtection(IpProtection),
    CabinetCabinetSize(CabinetCabinetSize),
    CabinetSize(CabinetSize),
    Cabinet(Cabinet),
    Module(Module),
    Item(Item),
    Placement(Placement),
    VideoProcessor(VideoProcessor),
}

#[Object]
impl Location {
    async fn id(&self) -> ID {
        encode_global_id("Location", self.id)
    }
    async fn code(&self) -> &str {
        &self.code
    }
    async fn name(&self) -> &str {
        &self.name
    }
    async fn active(&self) -> bool {
        self.active
    }
    async fn cabinets(&self, ctx: &Context<'_>) -> Result<Vec<Cabinet>> {
        Ok(services(ctx)?.catalog.cabinets_referencing("location_id", self.id).await?)
    }
    async fn modules(&self, ctx: &Context<'_>) -> Result<Vec<Module>> {
        let args = FindArgs::new().eq("location_id", self.id);
        Ok(services(ctx)?.catalog.list_active::<Module>(args).await?)
    }
}

#[Object]
impl Material {
    async fn id(&self) -> ID {
        encode_global_id("Material", self.id)
    }
    async fn code(&self) -> &str {
        &self.code
    }
    async fn name(&self) -> &str {
        &self.name
    }
    async fn active(&self) -> bool {
        self.active
    }
    async fn cabinets(&self, ctx: &Context<'_>) -> Result<Vec<Cabinet>> {
        Ok(services(ctx)?.catalog.cabinets_referencing("material_id", self.id).await?)
    }
}

#[Object]
impl IpProtection {
    async fn id(&self) -> ID {
        encode_global_id("IpProtection", self.id)
    }
    async fn code(&self) -> &str {
        &self.code
    }
    async fn name(&self) -> &str {
        &self.name
    }
    async fn active(&self) -> bool {
        self.active
    }
    async fn cabinets(&self, ctx: &Context<'_>) -> Result<Vec<Cabinet>> {
        Ok(services(ctx)?
            .catalog
            .cabinets_referencing("ip_protection_id", self.id)
            .await?)
    }
}

#[Object]
impl CabinetCabinetSize {
    async fn id(&self) -> ID {
        encode_global_id("CabinetCabinetSize", self.id)
    }
    async fn cabinet_id(&self) -> ID {
        encode_global_id("Cabinet", self.cabinet_id)
    }
    async fn cabinet_size_id(&self) -> ID {
        encode_global_id("CabinetSize", self.cabinet_size_id)
    }
    async fn cabinet(&self, ctx: &Context<'_>) -> Result<Option<Cabinet>> {
        Ok(services(ctx)?.catalog.by_id::<Cabinet>(self.cabinet_id).await?)
    }
    async fn cabinet_size(&self, ctx: &Context<'_>) -> Result<Option<CabinetSize>> {
        Ok(services(ctx)?
            .catalog
            .by_id::<CabinetSize>(self.cabinet_size_id)
            .await?)
    }
}

#[Object]
impl CabinetSize {
    async fn id(&self) -> ID {
        encode_global_id("CabinetSize", self.id)
    }
    async fn width(&self) -> i32 {
        self.width
    }
    async fn height(&self) -> i32 {
        self.height
    }
    async fn active(&self) -> bool {
        self.active
    }
}

#[Object]
impl Cabinet {
    async fn id(&self) -> ID {
        encode_global_id("Cabinet", self.id)
    }
    async fn code(&self) -> &str {
        &self.code
    }
    async fn name(&self) -> &str {
        &self.name
    }
    async fn module_code(&self) -> Option<&str> {
        self.module_code.as_deref()
    }
    /// Width in millimetres.
    async fn width(&self) -> i32 {
        self.width
    }
    /// Height in millimetres.
    async fn height(&self) -> i32 {
        self.height
    }
    async fn active(&self) -> bool {
        self.active
    }
    async fn location(&self, ctx: &Context<'_>) -> Result<Option<Location>> {
        match self.location_id {
            Some(id) => Ok(services(ctx)?.catalog.by_id::<Location>(id).await?),
            None => Ok(None),
        }
    }
    async fn material(&self, ctx: &Context<'_>) -> Result<Option<Material>> {
        match self.material_id {
            Some(id) => Ok(services(ctx)?.catalog.by_id::<Material>(id).await?),
            None => Ok(None),
        }
    }
    async fn ip_protection(&self, ctx: &Context<'_>) -> Result<Option<IpProtection>> {
        match self.ip_protection_id {
            Some(id) => Ok(services(ctx)?.catalog.by_id::<IpProtection>(id).await?),
            None => Ok(None),
        }
    }
    async fn module(&self, ctx: &Context<'_>) -> Result<Option<Module>> {
        match &self.module_code {
            Some(code) => Ok(services(ctx)?.catalog.module_by_code(code).await?),
            None => Ok(None),
        }
    }
    async fn sizes(&self, ctx: &Context<'_>) -> Result<Vec<CabinetCabinetSize>> {
        Ok(services(ctx)?.catalog.sizes_of_cabinet(self.id).await?)
    }
    async fn placements(&self, ctx: &Context<'_>) -> Result<Vec<Placement>> {
        Ok(services(ctx)?.placements.find_by_cabinet_code(&self.code).await?)
    }
    async fn price(&self, ctx: &Context<'_>) -> Result<Option<CabinetPrice>> {
        Ok(services(ctx)?
            .cabinet_prices
            .find_by_cabinet_code(&self.code, FindArgs::new())
            .await?)
    }
    async fn components(&self, ctx: &Context<'_>) -> Result<Vec<CabinetItem>> {
        Ok(services(ctx)?
            .components
            .find_by_cabinet_code(&self.code, FindArgs::new())
            .await?)
    }
}

#[Object]
impl Module {
    async fn id(&self) -> ID {
        encode_global_id("Module", self.id)
    }
    async fn code(&self) -> &str {
        &self.code
    }
    async fn name(&self) -> &str {
        &self.name
    }
    /// Pixel pitch in millimetres.
    async fn pitch(&self) -> f64 {
        self.pitch
    }
    async fn width(&self) -> i32 {
        self.width
    }
    async fn height(&self) -> i32 {
        self.height
    }
    async fn active(&self) -> bool {
        self.active
    }
    async fn location(&self, ctx: &Context<'_>) -> Result<Option<Location>> {
        match self.location_id {
            Some(id) => Ok(services(ctx)?.catalog.by_id::<Location>(id).await?),
            None => Ok(None),
        }
    }
    async fn price(&self, ctx: &Context<'_>) -> Result<Option<ModulePrice>> {
        Ok(services(ctx)?
            .module_prices
            .find_by_module_code(&self.code, FindArgs::new())
            .await?)
    }
    async fn components(&self, ctx: &Context<'_>) -> Result<Vec<ModuleItem>> {
        Ok(services(ctx)?
            .components
            .find_by_module_code(&self.code, FindArgs::new())
            .await?)
    }
}

#[Object]
impl Item {
    async fn id(&self) -> ID {
        encode_global_id("Item", self.id)
    }
    async fn code(&self) -> &str {
        &self.code
    }
    async fn name(&self) -> &str {
        &self.name
    }
    async fn unit(&self) -> &str {
        &self.unit
    }
    async fn active(&self) -> bool {
        self.active
    }
    async fn price(&self, ctx: &Context<'_>) -> Result<Option<ItemPrice>> {
        Ok(services(ctx)?
            .item_prices
            .find_by_item_code(&self.code, FindArgs::new())
            .await?)
    }
}

#[Object]
impl ItemPrice {
    async fn item_code(&self) -> &str {
        &self.item_code
    }
    async fn price(&self) -> f64 {
        self.price
    }
    async fn currency(&self) -> &str {
        &self.currency
    }
    async fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

#[Object]
impl ModulePrice {
    async fn module_code(&self) -> &str {
        &self.module_code
    }
    async fn price(&self) -> f64 {
        self.price
    }
    async fn currency(&self) -> &str {
        &self.currency
    }
    async fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

#[Object]
impl CabinetPrice {
    async fn cabinet_code(&self) -> &str {
        &self.cabinet_code
    }
    async fn price(&self) -> f64 {
        self.price
    }
    async fn currency(&self) -> &str {
        &self.currency
    }
    async fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }
}

#[Object]
impl CabinetItem {
    async fn item_code(&self) -> &str {
        &self.item_code
    }
    async fn quantity(&self) -> i32 {
        self.quantity
    }
    async fn item(&self, ctx: &Context<'_>) -> Result<Option<Item>> {
        Ok(services(ctx)?.catalog.item_by_code(&self.item_code).await?)
    }
    async fn price(&self, ctx: &Context<'_>) -> Result<Option<ItemPrice>> {
        Ok(services(ctx)?
            .item_prices
            .find_by_item_code(&self.item_code, FindArgs::new())
            .await?)
    }
}

#[Object]
impl ModuleItem {
    async fn item_code(&self) -> &str {
        &self.item_code
    }
    async fn quantity(&self) -> i32 {
        self.quantity
    }
    async fn item(&self, ctx: &Context<'_>) -> Result<Option<Item>> {
        Ok(services(ctx)?.catalog.item_by_code(&self.item_code).await?)
    }
    async fn price(&self, ctx: &Context<'_>) -> Result<Option<ItemPrice>> {
        Ok(services(ctx)?
            .item_prices
            .find_by_item_code(&self.item_code, FindArgs::new())
            .await?)
    }
}

#[Object]
impl Placement {
    async fn id(&self) -> ID {
        encode_global_id("Placement", self.id)
    }
    async fn code(&self) -> &str {
        &self.code
    }
    async fn name(&self) -> &str {
        &self.name
    }
    async fn active(&self) -> bool {
        self.active
    }
}

#[Object]
impl VideoProcessor {
    async fn id(&self) -> ID {
        encode_global_id("VideoProcessor", self.id)
    }
    async fn code(&self) -> &str {
        &self.code
    }
    async fn name(&self) -> &str {
        &self.name
    }
    async fn price(&self) -> f64 {
        self.price
    }
    async fn currency(&self) -> &str {
        &self.currency
    }
    async fn max_pixels(&self) -> Option<i32> {
        self.max_pixels
    }
    async fn active(&self) -> bool {
        self.active
    }
}

//! Root query.

use super::node::{decode_global_id, parse_id};
use super::types::Node;
use crate::model::*;
use crate::query::FindArgs;
use crate::service::Services;
use async_graphql::{Context, Error, Object, Result, ID};

pub struct QueryRoot;

fn services<'a>(ctx: &Context<'a>) -> Result<&'a Services> {
    ctx.data::<Services>()
}

fn paging(take: Option<i32>, skip: Option<i32>) -> FindArgs {
    let mut args = FindArgs::new();
    if let Some(n) = take.filter(|n| *n >= 0) {
        args = args.take(n as u32);
    }
    if let Some(n) = skip.filter(|n| *n >= 0) {
        args = args.skip(n as u32);
    }
    args
}

#[Object]
impl QueryRoot {
    /// Any node by global id.
    async fn node(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Node>> {
        let (type_name, key) =
            decode_global_id(&id).ok_or_else(|| Error::new(format!("invalid id '{}'", id.as_str())))?;
        let catalog = &services(ctx)?.catalog;
        let node = match type_name.as_str() {
            "Location" => catalog.by_id::<Location>(key).await?.map(Node::from),
            "Material" => catalog.by_id::<Material>(key).await?.map(Node::from),
            "IpProtection" => catalog.by_id::<IpProtection>(key).await?.map(Node::from),
            "CabinetCabinetSize" => catalog.by_id::<CabinetCabinetSize>(key).await?.map(Node::from),
            "CabinetSize" => catalog.by_id::<CabinetSize>(key).await?.map(Node::from),
            "Cabinet" => catalog.by_id::<Cabinet>(key).await?.map(Node::from),
            "Module" => catalog.by_id::<Module>(key).await?.map(Node::from),
            "Item" => catalog.by_id::<Item>(key).await?.map(Node::from),
            "Placement" => catalog.by_id::<Placement>(key).await?.map(Node::from),
            "VideoProcessor" => catalog.by_id::<VideoProcessor>(key).await?.map(Node::from),
            other => return Err(Error::new(format!("unknown node type '{}'", other))),
        };
        Ok(node)
    }

    async fn location(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Location>> {
        let key = parse_id("Location", &id)?;
        Ok(services(ctx)?.catalog.by_id(key).await?)
    }

    async fn locations(&self, ctx: &Context<'_>) -> Result<Vec<Location>> {
        Ok(services(ctx)?.catalog.list_active(FindArgs::new()).await?)
    }

    async fn material(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Material>> {
        let key = parse_id("Material", &id)?;
        Ok(services(ctx)?.catalog.by_id(key).await?)
    }

    async fn materials(&self, ctx: &Context<'_>) -> Result<Vec<Material>> {
        Ok(services(ctx)?.catalog.list_active(FindArgs::new()).await?)
    }

    async fn ip_protection(&self, ctx: &Context<'_>, id: ID) -> Result<Option<IpProtection>> {
        let key = parse_id("IpProtection", &id)?;
        Ok(services(ctx)?.catalog.by_id(key).await?)
    }

    async fn ip_protections(&self, ctx: &Context<'_>) -> Result<Vec<IpProtection>> {
        Ok(services(ctx)?.catalog.list_active(FindArgs::new()).await?)
    }

    async fn cabinet_cabinet_size(&self, ctx: &Context<'_>, id: ID) -> Result<Option<CabinetCabinetSize>> {
        let key = parse_id("CabinetCabinetSize", &id)?;
        Ok(services(ctx)?.catalog.by_id(key).await?)
    }

    async fn cabinet(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Cabinet>> {
        let key = parse_id("Cabinet", &id)?;
        Ok(services(ctx)?.catalog.by_id(key).await?)
    }

    async fn cabinets(&self, ctx: &Context<'_>, take: Option<i32>, skip: Option<i32>) -> Result<Vec<Cabinet>> {
        Ok(services(ctx)?.catalog.list_active(paging(take, skip)).await?)
    }

    async fn item_price(&self, ctx: &Context<'_>, item_code: String) -> Result<Option<ItemPrice>> {
        Ok(services(ctx)?
            .item_prices
            .find_by_item_code(&item_code, FindArgs::new())
            .await?)
    }

    async fn item_prices(&self, ctx: &Context<'_>, item_codes: Vec<String>) -> Result<Vec<ItemPrice>> {
        Ok(services(ctx)?
            .item_prices
            .find_many_by_item_codes(&item_codes, FindArgs::new())
            .await?)
    }

    async fn module_price(&self, ctx: &Context<'_>, module_code: String) -> Result<Option<ModulePrice>> {
        Ok(services(ctx)?
            .module_prices
            .find_by_module_code(&module_code, FindArgs::new())
            .await?)
    }

    async fn module_prices(&self, ctx: &Context<'_>, module_codes: Vec<String>) -> Result<Vec<ModulePrice>> {
        Ok(services(ctx)?
            .module_prices
            .find_many_by_module_codes(&module_codes, FindArgs::new())
            .await?)
    }

    async fn cabinet_price(&self, ctx: &Context<'_>, cabinet_code: String) -> Result<Option<CabinetPrice>> {
        Ok(services(ctx)?
            .cabinet_prices
            .find_by_cabinet_code(&cabinet_code, FindArgs::new())
            .await?)
    }

    async fn cabinet_prices(&self, ctx: &Context<'_>, cabinet_codes: Vec<String>) -> Result<Vec<CabinetPrice>> {
        Ok(services(ctx)?
            .cabinet_prices
            .find_many_by_cabinet_codes(&cabinet_codes, FindArgs::new())
            .await?)
    }

    async fn placements(&self, ctx: &Context<'_>, cabinet_code: String) -> Result<Vec<Placement>> {
        Ok(services(ctx)?.placements.find_by_cabinet_code(&cabinet_code).await?)
    }

    async fn cabinet_components(&self, ctx: &Context<'_>, cabinet_code: String) -> Result<Vec<CabinetItem>> {
        Ok(services(ctx)?
            .components
            .find_by_cabinet_code(&cabinet_code, FindArgs::new())
            .await?)
    }

    async fn module_components(&self, ctx: &Context<'_>, module_code: String) -> Result<Vec<ModuleItem>> {
        Ok(services(ctx)?
            .components
            .find_by_module_code(&module_code, FindArgs::new())
            .await?)
    }

    /// Active processors, cheapest first.
    async fn video_processors(
        &self,
        ctx: &Context<'_>,
        take: Option<i32>,
        skip: Option<i32>,
    ) -> Result<Vec<VideoProcessor>> {
        Ok(services(ctx)?.video_processors.find_all(paging(take, skip)).await?)
    }

    async fn video_processor(&self, ctx: &Context<'_>, code: String) -> Result<Option<VideoProcessor>> {
        Ok(services(ctx)?.video_processors.find_by_code(&code).await?)
    }
}

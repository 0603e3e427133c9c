//! Table definitions for the configurator catalog.

use super::entity::{ColumnDef, EntityDef, PgType};

const ID: ColumnDef = ColumnDef::new("id", PgType::Serial);
const CODE: ColumnDef = ColumnDef::new("code", PgType::Text).unique();
const NAME: ColumnDef = ColumnDef::new("name", PgType::Text);
const ACTIVE: ColumnDef = ColumnDef::new("active", PgType::Bool).default("true");
const WIDTH: ColumnDef = ColumnDef::new("width", PgType::Int4);
const HEIGHT: ColumnDef = ColumnDef::new("height", PgType::Int4);
const PRICE: ColumnDef = ColumnDef::new("price", PgType::Float8);
const CURRENCY: ColumnDef = ColumnDef::new("currency", PgType::Text).default("'RUB'");
const UPDATED_AT: ColumnDef = ColumnDef::new("updated_at", PgType::Timestamptz).default("NOW()");
const QUANTITY: ColumnDef = ColumnDef::new("quantity", PgType::Int4).default("1");

pub const LOCATIONS: EntityDef = EntityDef {
    name: "Location",
    table: "locations",
    primary_key: "id",
    columns: &[ID, CODE, NAME, ACTIVE],
};

pub const MATERIALS: EntityDef = EntityDef {
    name: "Material",
    table: "materials",
    primary_key: "id",
    columns: &[ID, CODE, NAME, ACTIVE],
};

pub const IP_PROTECTIONS: EntityDef = EntityDef {
    name: "IpProtection",
    table: "ip_protections",
    primary_key: "id",
    columns: &[ID, CODE, NAME, ACTIVE],
};

pub const CABINET_SIZES: EntityDef = EntityDef {
    name: "CabinetSize",
    table: "cabinet_sizes",
    primary_key: "id",
    columns: &[ID, WIDTH, HEIGHT, ACTIVE],
};

pub const MODULES: EntityDef = EntityDef {
    name: "Module",
    table: "modules",
    primary_key: "id",
    columns: &[
        ID,
        CODE,
        NAME,
        ColumnDef::new("pitch", PgType::Float8),
        WIDTH,
        HEIGHT,
        ColumnDef::new("location_id", PgType::Int4)
            .nullable()
            .references("locations", "id"),
        ACTIVE,
    ],
};

pub const CABINETS: EntityDef = EntityDef {
    name: "Cabinet",
    table: "cabinets",
    primary_key: "id",
    columns: &[
        ID,
        CODE,
        NAME,
        ColumnDef::new("module_code", PgType::Text).nullable(),
        ColumnDef::new("location_id", PgType::Int4)
            .nullable()
            .references("locations", "id"),
        ColumnDef::new("material_id", PgType::Int4)
            .nullable()
            .references("materials", "id"),
        ColumnDef::new("ip_protection_id", PgType::Int4)
            .nullable()
            .references("ip_protections", "id"),
        WIDTH,
        HEIGHT,
        ACTIVE,
    ],
};

pub const CABINET_CABINET_SIZES: EntityDef = EntityDef {
    name: "CabinetCabinetSize",
    table: "cabinet_cabinet_sizes",
    primary_key: "id",
    columns: &[
        ID,
        ColumnDef::new("cabinet_id", PgType::Int4).references("cabinets", "id"),
        ColumnDef::new("cabinet_size_id", PgType::Int4).references("cabinet_sizes", "id"),
    ],
};

pub const ITEMS: EntityDef = EntityDef {
    name: "Item",
    table: "items",
    primary_key: "id",
    columns: &[
        ID,
        CODE,
        NAME,
        ColumnDef::new("unit", PgType::Text).default("'pcs'"),
        ACTIVE,
    ],
};

pub const ITEM_PRICES: EntityDef = EntityDef {
    name: "ItemPrice",
    table: "item_prices",
    primary_key: "id",
    columns: &[
        ID,
        ColumnDef::new("item_code", PgType::Text).unique(),
        PRICE,
        CURRENCY,
        ACTIVE,
        UPDATED_AT,
    ],
};

pub const MODULE_PRICES: EntityDef = EntityDef {
    name: "ModulePrice",
    table: "module_prices",
    primary_key: "id",
    columns: &[
        ID,
        ColumnDef::new("module_code", PgType::Text).unique(),
        PRICE,
        CURRENCY,
        ACTIVE,
        UPDATED_AT,
    ],
};

pub const CABINET_PRICES: EntityDef = EntityDef {
    name: "CabinetPrice",
    table: "cabinet_prices",
    primary_key: "id",
    columns: &[
        ID,
        ColumnDef::new("cabinet_code", PgType::Text).unique(),
        PRICE,
        CURRENCY,
        ACTIVE,
        UPDATED_AT,
    ],
};

pub const CABINET_ITEMS: EntityDef = EntityDef {
    name: "CabinetItem",
    table: "cabinet_items",
    primary_key: "id",
    columns: &[
        ID,
        ColumnDef::new("cabinet_code", PgType::Text),
        ColumnDef::new("item_code", PgType::Text),
        QUANTITY,
        ACTIVE,
    ],
};

pub const MODULE_ITEMS: EntityDef = EntityDef {
    name: "ModuleItem",
    table: "module_items",
    primary_key: "id",
    columns: &[
        ID,
        ColumnDef::new("module_code", PgType::Text),
        ColumnDef::new("item_code", PgType::Text),
        QUANTITY,
        ACTIVE,
    ],
};

pub const PLACEMENTS: EntityDef = EntityDef {
    name: "Placement",
    table: "placements",
    primary_key: "id",
    columns: &[ID, CODE, NAME, ACTIVE],
};

pub const CABINET_PLACEMENTS: EntityDef = EntityDef {
    name: "CabinetPlacement",
    table: "cabinet_placements",
    primary_key: "id",
    columns: &[
        ID,
        ColumnDef::new("cabinet_code", PgType::Text),
        ColumnDef::new("placement_code", PgType::Text),
    ],
};

pub const VIDEO_PROCESSORS: EntityDef = EntityDef {
    name: "VideoProcessor",
    table: "video_processors",
    primary_key: "id",
    columns: &[
        ID,
        CODE,
        NAME,
        PRICE,
        CURRENCY,
        ColumnDef::new("max_pixels", PgType::Int4).nullable(),
        ACTIVE,
    ],
};

/// Every table, ordered so that referenced tables come first.
pub const ALL: &[&EntityDef] = &[
    &LOCATIONS,
    &MATERIALS,
    &IP_PROTECTIONS,
    &CABINET_SIZES,
    &MODULES,
    &CABINETS,
    &CABINET_CABINET_SIZES,
    &ITEMS,
    &ITEM_PRICES,
    &MODULE_PRICES,
    &CABINET_PRICES,
    &CABINET_ITEMS,
    &MODULE_ITEMS,
    &PLACEMENTS,
    &CABINET_PLACEMENTS,
    &VIDEO_PROCESSORS,
];

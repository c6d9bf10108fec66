//! Static registry of the `server.properties` keys the form knows about.
//!
//! Each [`FieldDescriptor`] ties a form field name to its on-disk property key,
//! its value type, an optional save-time default, and presentation hints.
//! Most keys use `-` separators; a few vanilla keys use `.`.

use crate::statics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Bool,
}

/// Form sections, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGroup {
    Basic,
    Gameplay,
    World,
    Network,
    Advanced,
}

impl FieldGroup {
    pub const ALL: [FieldGroup; 5] = [
        FieldGroup::Basic,
        FieldGroup::Gameplay,
        FieldGroup::World,
        FieldGroup::Network,
        FieldGroup::Advanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldGroup::Basic => statics::EN_GROUP_BASIC,
            FieldGroup::Gameplay => statics::EN_GROUP_GAMEPLAY,
            FieldGroup::World => statics::EN_GROUP_WORLD,
            FieldGroup::Network => statics::EN_GROUP_NETWORK,
            FieldGroup::Advanced => statics::EN_GROUP_ADVANCED,
        }
    }

    /// Grid width used when laying the group out.
    pub fn columns(self) -> usize {
        match self {
            FieldGroup::Basic => 2,
            _ => 3,
        }
    }
}

/// Save-time fallback. Never applied when loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    Bool(bool),
    Text(&'static str),
}

impl DefaultValue {
    pub fn to_property_string(self) -> String {
        match self {
            DefaultValue::Bool(true) => statics::PROPS_TRUE.to_string(),
            DefaultValue::Bool(false) => statics::PROPS_FALSE.to_string(),
            DefaultValue::Text(s) => s.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Widget {
    Text,
    Password,
    Number { min: i64, max: i64 },
    Toggle,
    Select(&'static [SelectOption]),
}

impl Widget {
    /// UI hint only: whether `text` looks valid for this widget.
    /// Empty input is accepted since it falls back to the default on save.
    pub fn accepts(&self, text: &str) -> bool {
        match self {
            Widget::Number { min, max } => {
                let text = text.trim();
                text.is_empty()
                    || text
                        .parse::<i64>()
                        .is_ok_and(|n| (*min..=*max).contains(&n))
            }
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub property_key: &'static str,
    pub field_type: FieldType,
    pub default: Option<DefaultValue>,
    pub group: FieldGroup,
    pub label: &'static str,
    pub widget: Widget,
    pub helper: Option<&'static str>,
}

impl FieldDescriptor {
    const fn text(
        name: &'static str,
        property_key: &'static str,
        group: FieldGroup,
        label: &'static str,
    ) -> Self {
        Self {
            name,
            property_key,
            field_type: FieldType::String,
            default: None,
            group,
            label,
            widget: Widget::Text,
            helper: None,
        }
    }

    const fn toggle(
        name: &'static str,
        property_key: &'static str,
        group: FieldGroup,
        label: &'static str,
        default: bool,
    ) -> Self {
        Self {
            name,
            property_key,
            field_type: FieldType::Bool,
            default: Some(DefaultValue::Bool(default)),
            group,
            label,
            widget: Widget::Toggle,
            helper: None,
        }
    }

    const fn number(
        name: &'static str,
        property_key: &'static str,
        group: FieldGroup,
        label: &'static str,
        min: i64,
        max: i64,
        default: &'static str,
    ) -> Self {
        Self {
            widget: Widget::Number { min, max },
            default: Some(DefaultValue::Text(default)),
            ..Self::text(name, property_key, group, label)
        }
    }

    const fn select(
        name: &'static str,
        property_key: &'static str,
        group: FieldGroup,
        label: &'static str,
        options: &'static [SelectOption],
        default: &'static str,
    ) -> Self {
        Self {
            widget: Widget::Select(options),
            default: Some(DefaultValue::Text(default)),
            ..Self::text(name, property_key, group, label)
        }
    }

    const fn password(self) -> Self {
        Self {
            widget: Widget::Password,
            ..self
        }
    }

    const fn with_default(self, default: &'static str) -> Self {
        Self {
            default: Some(DefaultValue::Text(default)),
            ..self
        }
    }

    const fn with_helper(self, helper: &'static str) -> Self {
        Self {
            helper: Some(helper),
            ..self
        }
    }
}

const fn opt(value: &'static str, label: &'static str) -> SelectOption {
    SelectOption { value, label }
}

const DIFFICULTIES: &[SelectOption] = &[
    opt("peaceful", "Peaceful"),
    opt("easy", "Easy"),
    opt("normal", "Normal"),
    opt("hard", "Hard"),
];

const GAMEMODES: &[SelectOption] = &[
    opt("survival", "Survival"),
    opt("creative", "Creative"),
    opt("adventure", "Adventure"),
    opt("spectator", "Spectator"),
];

const LEVEL_TYPES: &[SelectOption] = &[
    opt("minecraft:normal", "Normal"),
    opt("minecraft:flat", "Flat"),
    opt("minecraft:large_biomes", "Large Biomes"),
    opt("minecraft:amplified", "Amplified"),
    opt("minecraft:single_biome_surface", "Single Biome"),
];

const PORT_MAX: i64 = 65_535;
const INT_MAX: i64 = i32::MAX as i64;

use FieldDescriptor as F;
use FieldGroup::{Advanced, Basic, Gameplay, Network, World};

/// Every field the form can render, in display order within each group.
pub static FIELDS: &[FieldDescriptor] = &[
    // Basic
    F::text("motd", "motd", Basic, "MOTD")
        .with_default("A Minecraft Server")
        .with_helper("Message shown in the server list"),
    F::number("max_players", "max-players", Basic, "Max Players", 0, INT_MAX, "20"),
    F::toggle("online_mode", "online-mode", Basic, "Online Mode", true),
    F::toggle("enable_query", "enable-query", Basic, "Enable Query", false),
    F::toggle("enable_rcon", "enable-rcon", Basic, "Enable RCON", false),
    F::toggle("enable_status", "enable-status", Basic, "Enable Status", false),
    // Gameplay
    F::select("difficulty", "difficulty", Gameplay, "Difficulty", DIFFICULTIES, "easy"),
    F::select("gamemode", "gamemode", Gameplay, "Gamemode", GAMEMODES, "survival"),
    F::toggle("force_gamemode", "force-gamemode", Gameplay, "Force Gamemode", false),
    F::toggle("hardcore", "hardcore", Gameplay, "Hardcore", false),
    F::toggle("pvp", "pvp", Gameplay, "PvP", true),
    F::toggle("spawn_monsters", "spawn-monsters", Gameplay, "Spawn Monsters", false),
    F::toggle("spawn_animals", "spawn-animals", Gameplay, "Spawn Animals", false),
    F::toggle("spawn_npcs", "spawn-npcs", Gameplay, "Spawn NPCs", false),
    // World
    F::text("level_name", "level-name", World, "Level Name").with_default("world"),
    F::text("level_seed", "level-seed", World, "Level Seed")
        .with_helper("Leave empty for a random seed"),
    F::select("level_type", "level-type", World, "Level Type", LEVEL_TYPES, "minecraft:normal"),
    F::number("view_distance", "view-distance", World, "View Distance", 3, 32, "10"),
    F::number("spawn_protection", "spawn-protection", World, "Spawn Protection", 0, INT_MAX, "16"),
    F::toggle("generate_structures", "generate-structures", World, "Generate Structures", false),
    F::text("generator_settings", "generator-settings", World, "Generator Settings")
        .with_default("{}"),
    // Network
    F::number("server_port", "server-port", Network, "Server Port", 1, PORT_MAX, "25565"),
    F::number("query_port", "query.port", Network, "Query Port", 1, PORT_MAX, "25565"),
    F::text("rcon_password", "rcon.password", Network, "RCON Password").password(),
    F::number("rcon_port", "rcon.port", Network, "RCON Port", 1, PORT_MAX, "25575"),
    F::text("server_ip", "server-ip", Network, "Server IP")
        .with_helper("Leave empty to bind all interfaces"),
    // Advanced
    F::number(
        "network_compression_threshold",
        "network-compression-threshold",
        Advanced,
        "Network Compression Threshold",
        -1,
        INT_MAX,
        "256",
    ),
    F::number("max_tick_time", "max-tick-time", Advanced, "Max Tick Time", -1, i64::MAX, "60000"),
    F::toggle("enable_command_block", "enable-command-block", Advanced, "Enable Command Block", false),
    F::toggle("allow_flight", "allow-flight", Advanced, "Allow Flight", false),
    F::toggle("allow_nether", "allow-nether", Advanced, "Allow Nether", false),
    F::toggle("accepts_transfers", "accepts-transfers", Advanced, "Accepts Transfers", false),
    F::toggle(
        "broadcast_console_to_ops",
        "broadcast-console-to-ops",
        Advanced,
        "Broadcast Console To Ops",
        false,
    ),
    F::toggle("debug", "debug", Advanced, "Debug", false),
    F::number("op_permission_level", "op-permission-level", Advanced, "OP Permission Level", 0, 4, "4"),
    F::number(
        "simulation_distance",
        "simulation-distance",
        Advanced,
        "Simulation Distance",
        3,
        32,
        "10",
    ),
    F::toggle("sync_chunk_writes", "sync-chunk-writes", Advanced, "Sync Chunk Writes", false),
    F::toggle("whitelist", "white-list", Advanced, "Whitelist", false),
    F::toggle(
        "enable_jmx_monitoring",
        "enable-jmx-monitoring",
        Advanced,
        "Enable JMX Monitoring",
        false,
    ),
    F::toggle(
        "enforce_secure_profile",
        "enforce-secure-profile",
        Advanced,
        "Enforce Secure Profile",
        false,
    ),
    F::toggle("enforce_whitelist", "enforce-whitelist", Advanced, "Enforce Whitelist", false),
    F::number(
        "entity_broadcast_range_percentage",
        "entity-broadcast-range-percentage",
        Advanced,
        "Entity Broadcast Range %",
        10,
        1000,
        "100",
    ),
    F::number(
        "function_permission_level",
        "function-permission-level",
        Advanced,
        "Function Permission Level",
        1,
        4,
        "2",
    ),
    F::toggle("hide_online_players", "hide-online-players", Advanced, "Hide Online Players", false),
    F::text("initial_disabled_packs", "initial-disabled-packs", Advanced, "Initial Disabled Packs"),
    F::text("initial_enabled_packs", "initial-enabled-packs", Advanced, "Initial Enabled Packs")
        .with_default("vanilla"),
    F::toggle("log_ips", "log-ips", Advanced, "Log IPs", false),
    F::number(
        "max_chained_neighbor_updates",
        "max-chained-neighbor-updates",
        Advanced,
        "Max Chained Neighbor Updates",
        -1,
        INT_MAX,
        "1000000",
    ),
    F::number("max_world_size", "max-world-size", Advanced, "Max World Size", 1, 29_999_984, "29999984"),
    F::number("player_idle_timeout", "player-idle-timeout", Advanced, "Player Idle Timeout", 0, INT_MAX, "0"),
    F::toggle(
        "prevent_proxy_connections",
        "prevent-proxy-connections",
        Advanced,
        "Prevent Proxy Connections",
        false,
    ),
    F::number("rate_limit", "rate-limit", Advanced, "Rate Limit", 0, INT_MAX, "0"),
    F::text("resource_pack", "resource-pack", Advanced, "Resource Pack")
        .with_helper("Direct download URL"),
    F::text("resource_pack_id", "resource-pack-id", Advanced, "Resource Pack ID"),
    F::text("resource_pack_prompt", "resource-pack-prompt", Advanced, "Resource Pack Prompt"),
    F::text("resource_pack_sha1", "resource-pack-sha1", Advanced, "Resource Pack SHA1"),
    F::text("text_filtering_config", "text-filtering-config", Advanced, "Text Filtering Config"),
    F::toggle("use_native_transport", "use-native-transport", Advanced, "Use Native Transport", false),
];

pub fn find(name: &str) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|f| f.name == name)
}

pub fn find_by_property(property_key: &str) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|f| f.property_key == property_key)
}

pub fn fields_in(group: FieldGroup) -> impl Iterator<Item = &'static FieldDescriptor> {
    FIELDS.iter().filter(move |f| f.group == group)
}

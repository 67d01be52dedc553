//! Static catalog content.
//!
//! The catalog describes a fixed library layout, so the tables live here as
//! constants rather than being scraped from a checkout. Paths are stored the
//! way the catalog prints them; the per-genre scene paths are relative and
//! get the [`SCENE_PATH_PREFIX`] prepended at render time.

/// Prefix prepended to the pack scene columns when rendering.
pub const SCENE_PATH_PREFIX: &str = "ComponentLibrary/";

/// One shared dependency script and the role it plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dependency {
    pub path: &'static str,
    pub usage: &'static str,
}

/// One genre pack: its headline component(s), template scene, and demo scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pack {
    pub genre: &'static str,
    pub components: &'static str,
    pub template_scene: &'static str,
    pub demo_scene: &'static str,
}

pub const DEPENDENCIES: [Dependency; 6] = [
    Dependency {
        path: "ComponentLibrary/Dependencies/event_bus.gd",
        usage: "Global event bus",
    },
    Dependency {
        path: "ComponentLibrary/Dependencies/object_pool.gd",
        usage: "Global object pool",
    },
    Dependency {
        path: "ComponentLibrary/Dependencies/time_controller.gd",
        usage: "Global time control and freeze frames",
    },
    Dependency {
        path: "ComponentLibrary/Dependencies/local_time_domain.gd",
        usage: "Local time domain parent-node template",
    },
    Dependency {
        path: "ComponentLibrary/Dependencies/component_base.gd",
        usage: "Common component base class",
    },
    Dependency {
        path: "ComponentLibrary/Dependencies/character_component_base.gd",
        usage: "Character component base class",
    },
];

// The demo column says `Demos/` while the on-disk demo scenes live under
// per-pack `Demo/` directories (see `crate::scene`). The mismatch is
// inherited from the library layout itself and is reproduced as-is.
pub const PACKS: [Pack; 15] = [
    Pack {
        genre: "Foundation",
        components: "DataBlackboardComponent and others",
        template_scene: "Packs/Foundation/Templates/foundation_template.tscn",
        demo_scene: "Demos/Foundation/foundation_demo.tscn",
    },
    Pack {
        genre: "Action",
        components: "TriggerRouterComponent and others",
        template_scene: "Packs/Action/Templates/action_template.tscn",
        demo_scene: "Demos/Action/action_demo.tscn",
    },
    Pack {
        genre: "Time",
        components: "TimelineSwitchComponent and others",
        template_scene: "Packs/Time/Templates/time_template.tscn",
        demo_scene: "Demos/Time/time_demo.tscn",
    },
    Pack {
        genre: "UI",
        components: "UIPageStateComponent",
        template_scene: "Packs/UI/Templates/ui_template.tscn",
        demo_scene: "Demos/UI/ui_demo.tscn",
    },
    Pack {
        genre: "VFX",
        components: "ImpactVFXComponent",
        template_scene: "Packs/VFX/Templates/vfx_template.tscn",
        demo_scene: "Demos/VFX/vfx_demo.tscn",
    },
    Pack {
        genre: "Shooter",
        components: "ProjectileEmitterComponent",
        template_scene: "Packs/Shooter/Templates/projectile_emitter_template.tscn",
        demo_scene: "Demos/Shooter/shooter_demo.tscn",
    },
    Pack {
        genre: "RPG",
        components: "AttributeSetComponent",
        template_scene: "Packs/RPG/Templates/attribute_set_template.tscn",
        demo_scene: "Demos/RPG/rpg_demo.tscn",
    },
    Pack {
        genre: "Strategy",
        components: "ProductionQueueComponent",
        template_scene: "Packs/Strategy/Templates/production_queue_template.tscn",
        demo_scene: "Demos/Strategy/strategy_demo.tscn",
    },
    Pack {
        genre: "Survival",
        components: "StatusEffectComponent",
        template_scene: "Packs/Survival/Templates/status_effect_template.tscn",
        demo_scene: "Demos/Survival/survival_demo.tscn",
    },
    Pack {
        genre: "Card",
        components: "DeckDrawComponent",
        template_scene: "Packs/Card/Templates/deck_draw_template.tscn",
        demo_scene: "Demos/Card/card_demo.tscn",
    },
    Pack {
        genre: "Puzzle",
        components: "SequenceSwitchComponent",
        template_scene: "Packs/Puzzle/Templates/sequence_switch_template.tscn",
        demo_scene: "Demos/Puzzle/puzzle_demo.tscn",
    },
    Pack {
        genre: "Roguelike",
        components: "WeightedSpawnTableComponent",
        template_scene: "Packs/Roguelike/Templates/weighted_spawn_table_template.tscn",
        demo_scene: "Demos/Roguelike/roguelike_demo.tscn",
    },
    Pack {
        genre: "Platformer",
        components: "CoyoteJumpComponent",
        template_scene: "Packs/Platformer/Templates/coyote_jump_template.tscn",
        demo_scene: "Demos/Platformer/platformer_demo.tscn",
    },
    Pack {
        genre: "Racing",
        components: "LapCheckpointComponent",
        template_scene: "Packs/Racing/Templates/lap_checkpoint_template.tscn",
        demo_scene: "Demos/Racing/racing_demo.tscn",
    },
    Pack {
        genre: "Builder",
        components: "GridPlacementComponent",
        template_scene: "Packs/Builder/Templates/grid_placement_template.tscn",
        demo_scene: "Demos/Builder/builder_demo.tscn",
    },
];

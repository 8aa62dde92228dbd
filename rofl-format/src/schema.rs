//! The per-player stats schema table
//!
//! The stats record is a wide, flat, producer-defined field set. Rather
//! than a generated struct with hundreds of fields, the schema is plain
//! data: an ordered list of (field name, kind) pairs that drives a single
//! generic decode/encode loop in the codec. Regenerating after a producer
//! schema change means editing this table only.

/// Declared decode kind for one stats field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Integer that may arrive as a JSON number or a numeric string.
    Int,
    /// Plain string.
    Text,
    /// Integer-or-string union whose original JSON shape is preserved.
    IntOrText,
}

/// Ordered field table for the per-player stats record.
pub const STATS_SCHEMA: &[(&str, FieldKind)] = &[
    ("2026_S1A1_Skins_Ashe", FieldKind::Int),
    ("2026_S1A1_Skins_Briar", FieldKind::Int),
    ("2026_S1A1_Skins_Caitlyn", FieldKind::Int),
    ("2026_S1A1_Skins_Camille", FieldKind::Int),
    ("2026_S1A1_Skins_Galio", FieldKind::Int),
    ("2026_S1A1_Skins_Jayce", FieldKind::Int),
    ("2026_S1A1_Skins_Katarina", FieldKind::Int),
    ("2026_S1A1_Skins_Lillia", FieldKind::Int),
    ("2026_S1A1_Skins_Nautilus", FieldKind::Int),
    ("2026_S1A1_Skins_Ornn", FieldKind::Int),
    ("2026_S1A1_Skins_Poppy", FieldKind::Int),
    ("2026_S1A1_Skins_Samira", FieldKind::Int),
    ("2026_S1A1_Skins_Seraphine", FieldKind::Int),
    ("2026_S1A1_Skins_Yasuo", FieldKind::Int),
    ("2026_S1A1_Skins_Yuumi", FieldKind::Int),
    ("2026_S1A1_Skins_Ziggs", FieldKind::Int),
    ("2026_S1A1_SR_FaerieWards", FieldKind::Int),
    ("2026_S1A1_SR_GrowthSmashed", FieldKind::Int),
    ("2026_S1A1_SR_RoleQuestComplete", FieldKind::Int),
    ("ActMission_S1_A2_ArenaRoundsWon", FieldKind::Int),
    ("ActMission_S1_A2_BloodyPetalsCollected", FieldKind::Int),
    ("ActMission_S1_A2_FeatsOfStrength", FieldKind::Int),
    ("ALL_IN_PINGS", FieldKind::Int),
    ("ASSIST_ME_PINGS", FieldKind::Int),
    ("ASSISTS", FieldKind::Int),
    ("ATAKHAN_KILLS", FieldKind::Int),
    ("BARON_KILLS", FieldKind::Int),
    ("BARRACKS_KILLED", FieldKind::Int),
    ("BARRACKS_TAKEDOWNS", FieldKind::Int),
    ("BASIC_PINGS", FieldKind::Int),
    ("CHAMPION_MISSION_STAT_0", FieldKind::Int),
    ("CHAMPION_MISSION_STAT_1", FieldKind::Int),
    ("CHAMPION_MISSION_STAT_2", FieldKind::Int),
    ("CHAMPION_MISSION_STAT_3", FieldKind::Int),
    ("CHAMPION_TRANSFORM", FieldKind::Int),
    ("CHAMPIONS_KILLED", FieldKind::Int),
    ("COMMAND_PINGS", FieldKind::Int),
    ("CONSUMABLES_PURCHASED", FieldKind::Int),
    ("DANGER_PINGS", FieldKind::Int),
    ("DemonsHand_MissionPointsA", FieldKind::Int),
    ("DemonsHand_MissionPointsB", FieldKind::Int),
    ("DemonsHand_MissionPointsC", FieldKind::Int),
    ("DemonsHand_MissionPointsD", FieldKind::Int),
    ("DemonsHand_MissionPointsE", FieldKind::Int),
    ("DemonsHand_MissionPointsF", FieldKind::Int),
    ("DOUBLE_KILLS", FieldKind::Int),
    ("DRAGON_KILLS", FieldKind::Int),
    ("ENEMY_MISSING_PINGS", FieldKind::Int),
    ("ENEMY_VISION_PINGS", FieldKind::Int),
    ("Event_2025LR_StructuresEpicMonsters", FieldKind::Int),
    ("Event_ARAM_Docks", FieldKind::Int),
    ("Event_ARAM_Hexgates", FieldKind::Int),
    ("Event_Brawl_Jungle", FieldKind::Int),
    ("Event_Brawl_Minions", FieldKind::Int),
    ("Event_S1_A1_AprilFools_Dragon", FieldKind::Int),
    ("Event_S1_A1_AprilFools_Snowball", FieldKind::Int),
    ("Event_S1_A2_AprilFools_Dragon", FieldKind::Int),
    ("Event_S1_A2_AprilFools_Garen_Play", FieldKind::Int),
    ("Event_S1_A2_AprilFools_Garen_Takedown", FieldKind::Int),
    ("Event_S1_A2_AprilFools_Snowball", FieldKind::Int),
    ("Event_S1_A2_Arena_BraveryChampions", FieldKind::Int),
    ("Event_S1_A2_Arena_NoxianChampions", FieldKind::Int),
    ("Event_S1_A2_Arena_ReviveAllies", FieldKind::Int),
    ("Event_S1_A2_Esports_TakedownEpicMonstersSingleGame", FieldKind::Int),
    ("Event_S1_A2_Mordekaiser", FieldKind::Int),
    ("Event_S2A2_Exalted", FieldKind::Int),
    ("Event_S2A2_MV", FieldKind::Int),
    ("Event_S2A2_PetalPoints", FieldKind::Int),
    ("Event_S2A2Champ_DamageAbilities", FieldKind::Int),
    ("Event_S2A2Champ_DamageAutos", FieldKind::Int),
    ("EXP", FieldKind::Int),
    ("FRIENDLY_DAMPEN_LOST", FieldKind::Int),
    ("FRIENDLY_HQ_LOST", FieldKind::Int),
    ("FRIENDLY_TURRET_LOST", FieldKind::Int),
    ("GAME_ENDED_IN_EARLY_SURRENDER", FieldKind::Int),
    ("GAME_ENDED_IN_SURRENDER", FieldKind::Int),
    ("GET_BACK_PINGS", FieldKind::Int),
    ("GOLD_EARNED", FieldKind::Int),
    ("GOLD_SPENT", FieldKind::Int),
    ("HoL_ChampionsDamagedWhileHidden", FieldKind::Int),
    ("HoL_ControlWardsKilled", FieldKind::Int),
    ("HoL_Elite_AsheCrystalArrowTakedowns", FieldKind::Int),
    ("HoL_Elite_AsheHawkshotChampsRevealed", FieldKind::Int),
    ("HoL_Elite_EzrealEssenceFluxDetonated", FieldKind::Int),
    ("HoL_Elite_EzrealTrueshotBarrageMultiHit", FieldKind::Int),
    ("HoL_Elite_KaiSaAbilitiesUpgraded", FieldKind::Int),
    ("HoL_Elite_KaiSaKillerInstinctKills", FieldKind::Int),
    ("HoL_Elite_LucianCullingHits", FieldKind::Int),
    ("HoL_Elite_LucianPiercingLightMultiHit", FieldKind::Int),
    ("HoL_Elite_VayneCondemnStun", FieldKind::Int),
    ("HoL_Elite_VayneTumbleDodge", FieldKind::Int),
    ("HoL_EnemyTakedownUnderTower", FieldKind::Int),
    ("HoL_FightsSurvivedWhileLowHealth", FieldKind::Int),
    ("HoL_HiddenEnemiesDamaged", FieldKind::Int),
    ("HoL_JungleCampsStolen", FieldKind::Int),
    ("HoL_KillsWhileLowHealth", FieldKind::Int),
    ("HoL_OutnumberedTakedowns", FieldKind::Int),
    ("HoL_ShutdownGoldCollected", FieldKind::Int),
    ("HoL_SoloKills", FieldKind::Int),
    ("HoL_TurretsTakenWithinMinutes", FieldKind::Int),
    ("HOLD_PINGS", FieldKind::Int),
    ("HORDE_KILLS", FieldKind::Int),
    ("HQ_KILLED", FieldKind::Int),
    ("HQ_TAKEDOWNS", FieldKind::Int),
    ("ID", FieldKind::Int),
    ("INDIVIDUAL_POSITION", FieldKind::Text),
    ("ITEM0", FieldKind::Int),
    ("ITEM1", FieldKind::Int),
    ("ITEM2", FieldKind::Int),
    ("ITEM3", FieldKind::Int),
    ("ITEM4", FieldKind::Int),
    ("ITEM5", FieldKind::Int),
    ("ITEM6", FieldKind::Int),
    ("ITEMS_PURCHASED", FieldKind::Int),
    ("KEYSTONE_ID", FieldKind::Int),
    ("KILLING_SPREES", FieldKind::Int),
    ("LARGEST_ABILITY_DAMAGE", FieldKind::Int),
    ("LARGEST_ATTACK_DAMAGE", FieldKind::Int),
    ("LARGEST_CRITICAL_STRIKE", FieldKind::Int),
    ("LARGEST_KILLING_SPREE", FieldKind::Int),
    ("LARGEST_MULTI_KILL", FieldKind::Int),
    ("LAST_TAKEDOWN_TIME", FieldKind::Int),
    ("LEVEL", FieldKind::Int),
    ("LONGEST_TIME_SPENT_LIVING", FieldKind::Int),
    ("MAGIC_DAMAGE_DEALT_PLAYER", FieldKind::Int),
    ("MAGIC_DAMAGE_DEALT_TO_CHAMPIONS", FieldKind::Int),
    ("MAGIC_DAMAGE_TAKEN", FieldKind::Int),
    ("MINIONS_KILLED", FieldKind::Int),
    ("Missions_BXP_EarnedPerGame", FieldKind::Int),
    ("Missions_CannonMinionsKilled", FieldKind::Int),
    ("Missions_ChampionsHitWithAbilitiesEarlyGame", FieldKind::Int),
    ("Missions_ChampionsKilled", FieldKind::Int),
    ("Missions_ChampionTakedownsWhileGhosted", FieldKind::Int),
    ("Missions_ChampionTakedownsWithIgnite", FieldKind::Int),
    ("Missions_CreepScore", FieldKind::Int),
    ("Missions_CreepScoreBy10Minutes", FieldKind::Int),
    ("Missions_Crepe_DamageDealtSpeedZone", FieldKind::Int),
    ("Missions_Crepe_SnowballLanded", FieldKind::Int),
    ("Missions_Crepe_TakedownsWithInhibBuff", FieldKind::Int),
    ("Missions_DamageToChampsWithItems", FieldKind::Int),
    ("Missions_DamageToStructures", FieldKind::Int),
    ("Missions_DestroyPlants", FieldKind::Int),
    ("Missions_DominationRune", FieldKind::Int),
    ("Missions_GoldFromStructuresDestroyed", FieldKind::Int),
    ("Missions_GoldFromTurretPlatesTaken", FieldKind::Int),
    ("Missions_GoldPerMinute", FieldKind::Int),
    ("Missions_HealingFromLevelObjects", FieldKind::Int),
    ("Missions_HexgatesUsed", FieldKind::Int),
    ("Missions_ImmobilizeChampions", FieldKind::Int),
    ("Missions_InspirationRune", FieldKind::Int),
    ("Missions_LegendaryItems", FieldKind::Int),
    ("Missions_MinionsKilled", FieldKind::Int),
    ("Missions_PeriodicDamage", FieldKind::Int),
    ("Missions_PlaceUsefulControlWards", FieldKind::Int),
    ("Missions_PlaceUsefulWards", FieldKind::Int),
    ("Missions_PorosFed", FieldKind::Int),
    ("Missions_PrecisionRune", FieldKind::Int),
    ("Missions_ResolveRune", FieldKind::Int),
    ("Missions_SnowballsHit", FieldKind::Int),
    ("Missions_SorceryRune", FieldKind::Int),
    ("Missions_TakedownBaronsElderDragons", FieldKind::Int),
    ("Missions_TakedownDragons", FieldKind::Int),
    ("Missions_TakedownEpicMonsters", FieldKind::Int),
    ("Missions_TakedownEpicMonstersSingleGame", FieldKind::Int),
    ("Missions_TakedownGold", FieldKind::Int),
    ("Missions_TakedownsAfterExhausting", FieldKind::Int),
    ("Missions_TakedownsAfterTeleporting", FieldKind::Int),
    ("Missions_TakedownsBefore15Min", FieldKind::Int),
    ("Missions_TakedownStructures", FieldKind::Int),
    ("Missions_TakedownsUnderTurret", FieldKind::Int),
    ("Missions_TakedownsWithHelpFromMonsters", FieldKind::Int),
    ("Missions_TakedownWards", FieldKind::Int),
    ("Missions_TimeSpentActivelyPlaying", FieldKind::Int),
    ("Missions_TotalGold", FieldKind::Int),
    ("Missions_TrueDamageToStructures", FieldKind::Int),
    ("Missions_TurretPlatesDestroyed", FieldKind::Int),
    ("Missions_TwoChampsKilledWithSameAbility", FieldKind::Int),
    ("Missions_VoidMitesSummoned", FieldKind::Int),
    ("MUTED_ALL", FieldKind::Int),
    ("NAME", FieldKind::Text),
    ("NEED_VISION_PINGS", FieldKind::Int),
    ("NEUTRAL_MINIONS_KILLED", FieldKind::Int),
    ("NEUTRAL_MINIONS_KILLED_ENEMY_JUNGLE", FieldKind::Int),
    ("NEUTRAL_MINIONS_KILLED_YOUR_JUNGLE", FieldKind::Int),
    ("NODE_CAPTURE", FieldKind::Int),
    ("NODE_CAPTURE_ASSIST", FieldKind::Int),
    ("NODE_NEUTRALIZE", FieldKind::Int),
    ("NODE_NEUTRALIZE_ASSIST", FieldKind::Int),
    ("NUM_DEATHS", FieldKind::Int),
    ("OBJECTIVES_STOLEN", FieldKind::Int),
    ("OBJECTIVES_STOLEN_ASSISTS", FieldKind::Int),
    ("ON_MY_WAY_PINGS", FieldKind::Int),
    ("PENTA_KILLS", FieldKind::Int),
    ("PERK0", FieldKind::Int),
    ("PERK0_VAR1", FieldKind::Int),
    ("PERK0_VAR2", FieldKind::Int),
    ("PERK0_VAR3", FieldKind::Int),
    ("PERK1", FieldKind::Int),
    ("PERK1_VAR1", FieldKind::Int),
    ("PERK1_VAR2", FieldKind::Int),
    ("PERK1_VAR3", FieldKind::Int),
    ("PERK2", FieldKind::Int),
    ("PERK2_VAR1", FieldKind::Int),
    ("PERK2_VAR2", FieldKind::Int),
    ("PERK2_VAR3", FieldKind::Int),
    ("PERK3", FieldKind::Int),
    ("PERK3_VAR1", FieldKind::Int),
    ("PERK3_VAR2", FieldKind::Int),
    ("PERK3_VAR3", FieldKind::Int),
    ("PERK4", FieldKind::Int),
    ("PERK4_VAR1", FieldKind::Int),
    ("PERK4_VAR2", FieldKind::Int),
    ("PERK4_VAR3", FieldKind::Int),
    ("PERK5", FieldKind::Int),
    ("PERK5_VAR1", FieldKind::Int),
    ("PERK5_VAR2", FieldKind::Int),
    ("PERK5_VAR3", FieldKind::Int),
    ("PERK_PRIMARY_STYLE", FieldKind::Int),
    ("PERK_SUB_STYLE", FieldKind::Int),
    ("PHYSICAL_DAMAGE_DEALT_PLAYER", FieldKind::Int),
    ("PHYSICAL_DAMAGE_DEALT_TO_CHAMPIONS", FieldKind::Int),
    ("PHYSICAL_DAMAGE_TAKEN", FieldKind::Int),
    ("PING", FieldKind::Int),
    ("PLAYER_AUGMENT_1", FieldKind::Int),
    ("PLAYER_AUGMENT_2", FieldKind::Int),
    ("PLAYER_AUGMENT_3", FieldKind::Int),
    ("PLAYER_AUGMENT_4", FieldKind::Int),
    ("PLAYER_AUGMENT_5", FieldKind::Int),
    ("PLAYER_AUGMENT_6", FieldKind::Int),
    ("PLAYER_POSITION", FieldKind::Int),
    ("PLAYER_ROLE", FieldKind::Int),
    ("PLAYER_SCORE_0", FieldKind::Int),
    ("PLAYER_SCORE_1", FieldKind::Int),
    ("PLAYER_SCORE_10", FieldKind::Int),
    ("PLAYER_SCORE_11", FieldKind::Int),
    ("PLAYER_SCORE_2", FieldKind::Int),
    ("PLAYER_SCORE_3", FieldKind::Int),
    ("PLAYER_SCORE_4", FieldKind::Int),
    ("PLAYER_SCORE_5", FieldKind::Int),
    ("PLAYER_SCORE_6", FieldKind::Int),
    ("PLAYER_SCORE_7", FieldKind::Int),
    ("PLAYER_SCORE_8", FieldKind::Int),
    ("PLAYER_SCORE_9", FieldKind::Int),
    ("PLAYER_SUBTEAM", FieldKind::Int),
    ("PLAYER_SUBTEAM_PLACEMENT", FieldKind::Int),
    ("PLAYERS_I_MUTED", FieldKind::Int),
    ("PLAYERS_THAT_MUTED_ME", FieldKind::Int),
    ("PUSH_PINGS", FieldKind::Int),
    ("PUUID", FieldKind::Text),
    ("QUADRA_KILLS", FieldKind::Int),
    ("RETREAT_PINGS", FieldKind::Int),
    ("RIFT_HERALD_KILLS", FieldKind::Int),
    ("RIOT_ID_GAME_NAME", FieldKind::Text),
    ("RIOT_ID_TAG_LINE", FieldKind::IntOrText),
    ("S3A1_Event_DoombotsTakenDownBefore5", FieldKind::Int),
    ("S3A1_PlayAsDemaciansOrAgainstNoxians", FieldKind::Int),
    ("S3A1_Takedowns", FieldKind::Int),
    ("S3A2_PrismaticAug", FieldKind::Int),
    ("S3A2_ZaahenUnlock", FieldKind::Int),
    ("SeasonalMissions_TakedownAtakhan", FieldKind::Int),
    ("SIGHT_WARDS_BOUGHT_IN_GAME", FieldKind::Int),
    ("SKIN", FieldKind::Text),
    ("SPELL1_CAST", FieldKind::Int),
    ("SPELL2_CAST", FieldKind::Int),
    ("SPELL3_CAST", FieldKind::Int),
    ("SPELL4_CAST", FieldKind::Int),
    ("STAT_PERK_0", FieldKind::Int),
    ("STAT_PERK_1", FieldKind::Int),
    ("STAT_PERK_2", FieldKind::Int),
    ("SUMMON_SPELL1_CAST", FieldKind::Int),
    ("SUMMON_SPELL2_CAST", FieldKind::Int),
    ("SUMMONER_ID", FieldKind::Int),
    ("SUMMONER_SPELL_1", FieldKind::Int),
    ("SUMMONER_SPELL_2", FieldKind::Int),
    ("TEAM", FieldKind::Int),
    ("TEAM_EARLY_SURRENDERED", FieldKind::Int),
    ("TEAM_OBJECTIVE", FieldKind::Int),
    ("TEAM_POSITION", FieldKind::Text),
    ("TIME_CCING_OTHERS", FieldKind::Int),
    ("TIME_OF_FROM_LAST_DISCONNECT", FieldKind::Int),
    ("TIME_PLAYED", FieldKind::Int),
    ("TIME_SPENT_DISCONNECTED", FieldKind::Int),
    ("TOTAL_DAMAGE_DEALT", FieldKind::Int),
    ("TOTAL_DAMAGE_DEALT_TO_BUILDINGS", FieldKind::Int),
    ("TOTAL_DAMAGE_DEALT_TO_CHAMPIONS", FieldKind::Int),
    ("TOTAL_DAMAGE_DEALT_TO_EPIC_MONSTERS", FieldKind::Int),
    ("TOTAL_DAMAGE_DEALT_TO_OBJECTIVES", FieldKind::Int),
    ("TOTAL_DAMAGE_DEALT_TO_TURRETS", FieldKind::Int),
    ("TOTAL_DAMAGE_SELF_MITIGATED", FieldKind::Int),
    ("TOTAL_DAMAGE_SHIELDED_ON_TEAMMATES", FieldKind::Int),
    ("TOTAL_DAMAGE_TAKEN", FieldKind::Int),
    ("TOTAL_HEAL", FieldKind::Int),
    ("TOTAL_HEAL_ON_TEAMMATES", FieldKind::Int),
    ("TOTAL_TIME_CROWD_CONTROL_DEALT", FieldKind::Int),
    ("TOTAL_TIME_CROWD_CONTROL_DEALT_TO_CHAMPIONS", FieldKind::Int),
    ("TOTAL_TIME_SPENT_DEAD", FieldKind::Int),
    ("TOTAL_UNITS_HEALED", FieldKind::Int),
    ("TRIPLE_KILLS", FieldKind::Int),
    ("TRUE_DAMAGE_DEALT_PLAYER", FieldKind::Int),
    ("TRUE_DAMAGE_DEALT_TO_CHAMPIONS", FieldKind::Int),
    ("TRUE_DAMAGE_TAKEN", FieldKind::Int),
    ("TURRET_TAKEDOWNS", FieldKind::Int),
    ("TURRETS_KILLED", FieldKind::Int),
    ("UNREAL_KILLS", FieldKind::Int),
    ("VICTORY_POINT_TOTAL", FieldKind::Int),
    ("VISION_CLEARED_PINGS", FieldKind::Int),
    ("VISION_SCORE", FieldKind::Int),
    ("VISION_WARDS_BOUGHT_IN_GAME", FieldKind::Int),
    ("WARD_KILLED", FieldKind::Int),
    ("WARD_PLACED", FieldKind::Int),
    ("WARD_PLACED_DETECTOR", FieldKind::Int),
    ("WAS_AFK", FieldKind::Int),
    ("WAS_AFK_AFTER_FAILED_SURRENDER", FieldKind::Int),
    ("WAS_EARLY_SURRENDER_ACCOMPLICE", FieldKind::Int),
    ("WAS_LEAVER", FieldKind::Int),
    ("WAS_SURRENDER_DUE_TO_AFK", FieldKind::Int),
    ("WeeklyMission_S2_DamagingAbilities", FieldKind::Int),
    ("WeeklyMission_S2_FeatsOfStrength", FieldKind::Int),
    ("WeeklyMission_S2_SpiritPetals", FieldKind::Int),
    ("WIN", FieldKind::Text),
];

/// Look up the declared kind of a stats field.
pub fn field_kind(name: &str) -> Option<FieldKind> {
    STATS_SCHEMA
        .iter()
        .find(|(field, _)| *field == name)
        .map(|(_, kind)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_names_are_unique() {
        let mut names: Vec<&str> = STATS_SCHEMA.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), STATS_SCHEMA.len());
    }

    #[test]
    fn test_known_text_fields() {
        for field in [
            "INDIVIDUAL_POSITION",
            "NAME",
            "PUUID",
            "RIOT_ID_GAME_NAME",
            "SKIN",
            "TEAM_POSITION",
            "WIN",
        ] {
            assert_eq!(field_kind(field), Some(FieldKind::Text), "{field}");
        }
    }

    #[test]
    fn test_tag_line_is_the_only_union_field() {
        assert_eq!(field_kind("RIOT_ID_TAG_LINE"), Some(FieldKind::IntOrText));
        let unions = STATS_SCHEMA
            .iter()
            .filter(|(_, kind)| *kind == FieldKind::IntOrText)
            .count();
        assert_eq!(unions, 1);
    }

    #[test]
    fn test_numeric_fields_dominate() {
        assert_eq!(field_kind("CHAMPIONS_KILLED"), Some(FieldKind::Int));
        assert_eq!(field_kind("TEAM"), Some(FieldKind::Int));
        assert_eq!(field_kind("GOLD_EARNED"), Some(FieldKind::Int));
    }

    #[test]
    fn test_unknown_field_has_no_kind() {
        assert_eq!(field_kind("NOT_A_REAL_FIELD"), None);
    }
}

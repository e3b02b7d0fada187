//! Player profile payloads decoded from the Play Games profile endpoint.

// self
use crate::_prelude::*;

/// Player profile returned by the provider, rebuilt once per request and dropped after the
/// response is written.
///
/// Every field tolerates absence: the provider omits sections a player never populated, and the
/// whole payload decodes to defaults in that case instead of failing the request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayerProfile {
	/// Resource kind discriminator.
	pub kind: String,
	/// Stable player identifier.
	pub player_id: String,
	/// Public display name.
	pub display_name: String,
	/// Avatar image URL.
	pub avatar_image_url: String,
	/// Portrait banner URL.
	pub banner_url_portrait: String,
	/// Landscape banner URL.
	pub banner_url_landscape: String,
	/// Profile visibility settings.
	pub profile_settings: ProfileSettings,
	/// Experience and level progression.
	pub experience_info: ExperienceInfo,
	/// Honorific title, when the player has one.
	pub title: String,
	/// Per-game player identifier.
	pub game_player_id: String,
}

/// Visibility settings attached to a profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProfileSettings {
	/// Resource kind discriminator.
	pub kind: String,
	/// Whether the profile is publicly visible.
	pub profile_visible: bool,
	/// Friends list visibility label.
	pub friends_list_visibility: String,
}

/// Experience progression attached to a profile.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceInfo {
	/// Resource kind discriminator.
	pub kind: String,
	/// Current experience points, serialized as a decimal string.
	pub current_experience_points: String,
	/// Millisecond timestamp of the last level-up, serialized as a decimal string.
	pub last_level_up_timestamp_millis: String,
	/// Level the player currently occupies.
	pub current_level: LevelInfo,
	/// Next level in the progression ladder.
	pub next_level: LevelInfo,
}

/// A single level milestone in the progression ladder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LevelInfo {
	/// Resource kind discriminator.
	pub kind: String,
	/// Level ordinal.
	pub level: u32,
	/// Experience floor for the level, serialized as a decimal string.
	pub min_experience_points: String,
	/// Experience ceiling for the level, serialized as a decimal string.
	pub max_experience_points: String,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn profile_decodes_full_payload() {
		let payload = r#"{
			"kind": "games#player",
			"playerId": "123456789",
			"displayName": "Player One",
			"avatarImageUrl": "https://cdn.example.com/avatar.png",
			"bannerUrlPortrait": "https://cdn.example.com/portrait.png",
			"bannerUrlLandscape": "https://cdn.example.com/landscape.png",
			"profileSettings": {
				"kind": "games#profileSettings",
				"profileVisible": true,
				"friendsListVisibility": "VISIBLE"
			},
			"experienceInfo": {
				"kind": "games#playerExperienceInfo",
				"currentExperiencePoints": "1200",
				"lastLevelUpTimestampMillis": "1700000000000",
				"currentLevel": {
					"kind": "games#playerLevel",
					"level": 3,
					"minExperiencePoints": "1000",
					"maxExperiencePoints": "2000"
				},
				"nextLevel": {
					"kind": "games#playerLevel",
					"level": 4,
					"minExperiencePoints": "2000",
					"maxExperiencePoints": "4000"
				}
			},
			"title": "Adventurer",
			"gamePlayerId": "g-987"
		}"#;
		let profile: PlayerProfile =
			serde_json::from_str(payload).expect("Full profile payload should decode.");

		assert_eq!(profile.player_id, "123456789");
		assert_eq!(profile.display_name, "Player One");
		assert_eq!(profile.avatar_image_url, "https://cdn.example.com/avatar.png");
		assert_eq!(profile.banner_url_landscape, "https://cdn.example.com/landscape.png");
		assert!(profile.profile_settings.profile_visible);
		assert_eq!(profile.experience_info.current_level.level, 3);
		assert_eq!(profile.experience_info.next_level.max_experience_points, "4000");
	}

	#[test]
	fn profile_tolerates_omitted_sections() {
		let profile: PlayerProfile = serde_json::from_str(r#"{"playerId":"42"}"#)
			.expect("Sparse profile payload should decode to defaults.");

		assert_eq!(profile.player_id, "42");
		assert!(profile.avatar_image_url.is_empty());
		assert!(!profile.profile_settings.profile_visible);
		assert_eq!(profile.experience_info.current_level.level, 0);
	}
}

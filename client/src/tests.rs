#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mockito::{Matcher, Mock, ServerGuard};
    use pokedex_core::{
        BaseStats, Error, FetchError, Resolver, TypeDataProvider, TypeRelationCache,
    };
    use serde_json::json;

    use crate::{ClientError, PokeApiClient};

    fn resource(name: &str) -> serde_json::Value {
        json!({ "name": name, "url": format!("https://pokeapi.co/api/v2/type/{}/", name) })
    }

    fn type_body(name: &str, from2: &[&str], from_half: &[&str], to2: &[&str]) -> String {
        let list = |names: &[&str]| names.iter().map(|n| resource(n)).collect::<Vec<_>>();
        json!({
            "id": 1,
            "name": name,
            "damage_relations": {
                "double_damage_from": list(from2),
                "half_damage_from": list(from_half),
                "no_damage_from": [],
                "double_damage_to": list(to2),
                "half_damage_to": [],
                "no_damage_to": []
            }
        })
        .to_string()
    }

    async fn mock_json(server: &mut ServerGuard, path: &str, body: String, hits: usize) -> Mock {
        server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(hits)
            .create_async()
            .await
    }

    async fn mock_fire_and_water(server: &mut ServerGuard, hits: usize) -> (Mock, Mock) {
        let fire = mock_json(
            server,
            "/type/fire",
            type_body(
                "fire",
                &["ground", "rock", "water"],
                &["bug", "steel", "fire", "grass", "ice", "fairy"],
                &["bug", "steel", "grass", "ice"],
            ),
            hits,
        )
        .await;
        let water = mock_json(
            server,
            "/type/water",
            type_body(
                "water",
                &["grass", "electric"],
                &["steel", "fire", "water", "ice"],
                &["ground", "rock", "fire"],
            ),
            hits,
        )
        .await;
        (fire, water)
    }

    #[tokio::test]
    async fn test_pokemon() {
        let mut server = mockito::Server::new_async().await;
        let body = json!({
            "name": "bulbasaur",
            "types": [
                {"slot": 1, "type": resource("grass")},
                {"slot": 2, "type": resource("poison")}
            ],
            "stats": [
                {"base_stat": 45, "stat": {"name": "hp", "url": ""}},
                {"base_stat": 49, "stat": {"name": "attack", "url": ""}},
                {"base_stat": 49, "stat": {"name": "defense", "url": ""}},
                {"base_stat": 65, "stat": {"name": "special-attack", "url": ""}},
                {"base_stat": 65, "stat": {"name": "special-defense", "url": ""}},
                {"base_stat": 45, "stat": {"name": "speed", "url": ""}}
            ],
            "sprites": {"front_default": "https://example.test/1.png"}
        });
        let mock = mock_json(&mut server, "/pokemon/bulbasaur", body.to_string(), 1).await;

        let client = PokeApiClient::new(&server.url());
        let creature = client.pokemon("Bulbasaur").await.unwrap();

        assert_eq!(creature.name, "bulbasaur");
        assert_eq!(creature.types, vec!["grass", "poison"]);
        assert_eq!(creature.stats, BaseStats::new(45, 49, 49, 65, 65, 45));
        assert_eq!(creature.stats.total(), 318);
        assert_eq!(creature.sprite.as_deref(), Some("https://example.test/1.png"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_pokemon_not_found() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/pokemon/agumon")
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let client = PokeApiClient::new(&server.url());
        let err = client.pokemon("agumon").await.unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.into_creature_error(), Error::CreatureNotFound("agumon".to_string()));
    }

    #[tokio::test]
    async fn test_invalid_name_never_hits_network() {
        let server = mockito::Server::new_async().await;
        let client = PokeApiClient::new(&server.url());

        let err = client.pokemon("../type").await.unwrap_err();
        assert!(matches!(err, ClientError::InvalidName(_)));
        assert!(matches!(err.into_creature_error(), Error::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_server_error_is_unavailable() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/type/fire")
            .with_status(503)
            .create_async()
            .await;

        let client = PokeApiClient::new(&server.url());
        let err = client.fetch_type_relations("fire").await.unwrap_err();
        assert!(matches!(err, FetchError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_malformed_body_is_unavailable() {
        let mut server = mockito::Server::new_async().await;
        mock_json(&mut server, "/type/fire", "{\"oops\": true}".to_string(), 1).await;

        let client = PokeApiClient::new(&server.url());
        let err = client.type_relations("fire").await.unwrap_err();
        assert!(matches!(err, ClientError::Parse(_)));
        assert!(matches!(FetchError::from(err), FetchError::Unavailable(_)));
    }

    #[tokio::test]
    async fn test_type_relations() {
        let mut server = mockito::Server::new_async().await;
        let (fire, _water) = mock_fire_and_water(&mut server, 1).await;

        let client = PokeApiClient::new(&server.url());
        let relations = client.type_relations("fire").await.unwrap();

        assert_eq!(relations.name, "fire");
        assert!(relations.weakness_sources.contains("water"));
        assert_eq!(relations.resistance_sources.len(), 6);
        assert_eq!(relations.advantage_targets.len(), 4);
        fire.assert_async().await;
    }

    #[tokio::test]
    async fn test_type_names_skip_pseudo_types() {
        let mut server = mockito::Server::new_async().await;
        let body = json!({
            "count": 4,
            "results": [
                resource("normal"),
                resource("fire"),
                resource("unknown"),
                resource("shadow")
            ]
        });
        server
            .mock("GET", "/type")
            .match_query(Matcher::UrlEncoded("limit".into(), "100".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let client = PokeApiClient::new(&server.url());
        assert_eq!(client.type_names().await.unwrap(), vec!["normal", "fire"]);
    }

    #[tokio::test]
    async fn test_resolve_through_cache_fetches_each_type_once() {
        let mut server = mockito::Server::new_async().await;
        let (fire, water) = mock_fire_and_water(&mut server, 1).await;

        let client = PokeApiClient::new(&server.url());
        let resolver = Resolver::new(Arc::new(TypeRelationCache::new(client)));

        let first = resolver.resolve(&["fire", "water"]).await.unwrap();
        let second = resolver.resolve(&["water", "fire"]).await.unwrap();

        let weakness: Vec<&str> = first.weakness.iter().map(String::as_str).collect();
        assert_eq!(weakness, vec!["electric", "ground", "rock"]);
        assert_eq!(first.resistance, second.resistance);

        fire.assert_async().await;
        water.assert_async().await;
    }

    #[tokio::test]
    async fn test_unknown_type_through_cache() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/type/cosmic")
            .with_status(404)
            .create_async()
            .await;

        let client = PokeApiClient::new(&server.url());
        let resolver = Resolver::new(Arc::new(TypeRelationCache::new(client)));

        let err = resolver.resolve(&["cosmic"]).await.unwrap_err();
        assert_eq!(err, Error::TypeNotFound("cosmic".to_string()));
    }

    #[test]
    fn test_base_url_gets_trailing_slash() {
        assert_eq!(
            PokeApiClient::new("http://localhost:1234").base_url(),
            "http://localhost:1234/"
        );
        assert_eq!(PokeApiClient::default().base_url(), crate::POKEAPI_URL);
    }
}

//! Position-bucketed taunt quotes for ranking cards
//!
//! The quote shown under each card depends on the player's bucket (champion,
//! podium, mid-pack, tail) and is picked deterministically from the pool by
//! hashing the player name, so a card keeps its quote across re-renders and
//! refreshes instead of flickering through the pool.

use nerdrats_core::Track;
use twox_hash::XxHash64;

const QUOTE_SEED: u64 = 0x4e45_5244; // "NERD"

const TOP_DISTANCE: &[&str] = &[
    "Enquanto os outros dormiam, seu cursor viajava. Vitória merecida! 🏆",
    "Você é o Usain Bolt da programação: rápido nos dedos, lento em levantar da cadeira. 🥇",
    "Primeiro lugar no ranking, último lugar em exposição solar. Equilíbrio é tudo! 🌞",
    "Sua cadeira merece um troféu por aguentar tanto tempo com você nela. 👑",
];

const PODIUM_DISTANCE: &[&str] = &[
    "Quase lá! Mais alguns bugs para corrigir e você chega ao topo. 🥈",
    "Prata virtual! Seu sedentarismo está quase no nível profissional. 🏅",
    "Pódio virtual garantido. Sua coluna vertebral não está tão impressionada... 🦴",
    "Tão perto do topo! Talvez ignorando mais algumas refeições... 🍕",
];

const MID_DISTANCE: &[&str] = &[
    "Meio do pelotão: nem o mais sedentário, nem o mais ativo. Perfeitamente equilibrado. 🧘",
    "Você está subindo no ranking! Sua cadeira está afundando na mesma proporção. 🪑",
    "Nem tão rápido, nem tão devagar. Como um bom algoritmo de ordenação. 🔄",
    "Posição decente! Produtividade e postura inversamente proporcionais. 📊",
];

const TAIL_DISTANCE: &[&str] = &[
    "Ei, pelo menos você está no ranking! Mais do que seu plano de exercícios pode dizer. 🏋️",
    "Posição humilde, mas seu potencial de sedentarismo é promissor. 📈",
    "Ainda há muito espaço para crescer. No ranking e na cadeira. 🪑",
    "Não desanime: mais algumas noites viradas codando e você sobe. 🌙",
];

const TOP_KEYDOWNS: &[&str] = &[
    "Mais teclas que todo mundo e nenhuma tendinite declarada. Por enquanto. 🏆",
    "Seus dedos são lendários. Seu teclado pediu transferência. ⌨️",
    "Campeão de digitação! O corretor ortográfico desistiu de acompanhar. 🥇",
    "Primeiro lugar! Seu teclado mecânico está considerando aposentadoria precoce. 👑",
];

const PODIUM_KEYDOWNS: &[&str] = &[
    "Quase lá! Mais alguns energy drinks e você chega ao primeiro lugar. ⚡",
    "Prata na digitação, ouro em ignorar os sinais de tendinite. 🥈",
    "Seus dedos estão quase pegando fogo. O extintor está pronto? 🔥",
    "Posição honrosa! Seu ortopedista também está orgulhoso do negócio. 👨‍⚕️",
];

const MID_KEYDOWNS: &[&str] = &[
    "Velocidade média, erros de digitação acima da média. Perfeitamente equilibrado. 🧘",
    "Meio do pelotão: seu teclado agradece o ritmo moderado. ⌨️",
    "Nem tão rápido, nem tão devagar. Como uma boa busca binária. 🔍",
    "Posição intermediária: seu teclado ainda tem todas as letras visíveis. 🔤",
];

const TAIL_KEYDOWNS: &[&str] = &[
    "Qualidade é melhor que quantidade. (É o que dizemos para nos sentirmos melhor.) 🐢",
    "Digitação lenta, pensamento profundo. Einstein também não digitava rápido. 🧠",
    "Você está economizando a vida útil do seu teclado. Estratégia de longo prazo. 📈",
    "Posição modesta, mas seu código provavelmente tem menos bugs que o do primeiro lugar. 🐛",
];

fn pool_for(track: Track, position: usize) -> &'static [&'static str] {
    match (track, position) {
        (Track::Distance, 1) => TOP_DISTANCE,
        (Track::Distance, 2..=3) => PODIUM_DISTANCE,
        (Track::Distance, 4..=10) => MID_DISTANCE,
        (Track::Distance, _) => TAIL_DISTANCE,
        (Track::Keydowns, 1) => TOP_KEYDOWNS,
        (Track::Keydowns, 2..=3) => PODIUM_KEYDOWNS,
        (Track::Keydowns, 4..=10) => MID_KEYDOWNS,
        (Track::Keydowns, _) => TAIL_KEYDOWNS,
    }
}

/// Pick the taunt for a player's card.
#[must_use]
pub fn position_quote(track: Track, position: usize, player_name: &str) -> &'static str {
    let pool = pool_for(track, position);
    let digest = XxHash64::oneshot(QUOTE_SEED, player_name.as_bytes());
    let index = usize::try_from(digest % pool.len() as u64).unwrap_or(0);
    pool[index]
}

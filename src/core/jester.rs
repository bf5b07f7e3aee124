//! Jester game mode: rules text and the random pick of the jester.

use rand::Rng;
use rand::seq::SliceRandom;

/// Private message sent to the chosen player.
pub const JESTER_NOTICE: &str = "Ora sei il jester";

/// Rules of the jester game mode, sent verbatim by `rules_jester`.
pub const RULES_JESTER: &str = "```Per giocare la modalità jester si applicano le seguenti regole:
All'inizio della partita un giocatore a caso presente nella chat vocale sarà nominato jester attraverso un messaggio in privato

Se il jester è un impostore, non accade nulla e la partita si svolge normalmente.
Se il jester è un crewman, da quel momento in poi cambia il suo ruolo e diviene un jester.

Il jester ha le stesse abilità dei crewman, ma una win condition diversa. Non ha alcun obbligo particolare e può fare quello che vuole

CONDIZIONI DI VITTORIA:
impostori: uccidere abbastanza persone o concludere un sabotaggio
crewman: buttare fuori tutti gli impostori (ma non il jester) o concludere le task eccetto l'ultima barra. Una volta raggiunta questa soglia, bisogna utilizzare un emergency meeting per determinare se tutte le task ad eccezione di quelle del jester sono state svolte. Il jester, se presente, darà la conferma
jester: venire buttato fuori da una votazione```";

/// Chooses the jester uniformly among `players`; `None` for an empty channel.
pub fn pick_jester<'a, T, R: Rng + ?Sized>(players: &'a [T], rng: &mut R) -> Option<&'a T> {
    players.choose(rng)
}

//! `~sorta` expressed as a composition of `sometimes` and `maybe` (spec §4.2
//! table: `sorta` `depends_on` `[sometimes, maybe]`), rather than
//! `sorta_print`'s own independent probability roll.

use kinda_personality::{MessageKind, PersonalityContext};
use kinda_runtime::{maybe, sometimes, PrintOutcome};

pub struct SortaComposition;

impl SortaComposition {
    /// Prints if either simpler construct would have: whichever of
    /// `sometimes`/`maybe` is more permissive under the active profile
    /// decides the outcome, instead of a dedicated threshold.
    pub fn evaluate(&self, ctx: &mut PersonalityContext, args: &[String]) -> PrintOutcome {
        let should_print = sometimes(ctx, true) || maybe(ctx, true);
        if should_print {
            PrintOutcome::Printed(args.join(" "))
        } else {
            PrintOutcome::Suppressed(ctx.styled_message(MessageKind::SortaShrug))
        }
    }
}

//! Built-in questions, one row per leap, categories in walk order
//! (motor, sensory, communication, feeding).

pub(super) const LEAPS: &[(u8, [&[&str]; 4])] = &[
    (
        1,
        [
            &[
                "Does your baby lift their head briefly during tummy time?",
                "Does your baby move both arms and legs equally?",
                "Does your baby bring their hands near their mouth?",
            ],
            &[
                "Does your baby turn toward a bright light?",
                "Does your baby startle at a sudden loud sound?",
                "Does your baby calm down when picked up?",
            ],
            &[
                "Does your baby look at faces for a few seconds?",
                "Does your baby make small throaty sounds?",
                "Does your baby cry differently when hungry or tired?",
            ],
            &[
                "Does your baby root when their cheek is stroked?",
                "Does your baby feed 8 to 12 times a day?",
                "Does your baby latch or take the bottle without long struggles?",
            ],
        ],
    ),
    (
        2,
        [
            &[
                "Does your baby hold their head up at 45 degrees on their tummy?",
                "Does your baby kick both legs vigorously?",
                "Does your baby open and close their hands?",
                "Does your baby push down with their legs when feet touch a surface?",
            ],
            &[
                "Does your baby follow a moving toy with their eyes?",
                "Does your baby turn their head toward voices?",
                "Does your baby notice patterns such as stripes or checks?",
            ],
            &[
                "Does your baby smile back when you smile?",
                "Does your baby coo or make vowel sounds?",
                "Does your baby quiet down when spoken to?",
            ],
            &[
                "Does your baby settle into a regular feeding rhythm?",
                "Does your baby coordinate sucking and swallowing smoothly?",
                "Does your baby signal hunger before crying?",
            ],
        ],
    ),
    (
        3,
        [
            &[
                "Does your baby hold their head steady when held upright?",
                "Does your baby bat at toys hanging overhead?",
                "Does your baby push up on forearms during tummy time?",
                "Does your baby bring both hands together?",
            ],
            &[
                "Does your baby watch their own hands?",
                "Does your baby react to changes in the tone of your voice?",
                "Does your baby enjoy different textures against their skin?",
            ],
            &[
                "Does your baby squeal or gurgle to get attention?",
                "Does your baby take turns making sounds with you?",
                "Does your baby recognise familiar people at a distance?",
                "Does your baby laugh out loud?",
            ],
            &[
                "Does your baby stay content for longer stretches between feeds?",
                "Does your baby pause and look around while feeding?",
                "Does your baby bring their hands to the bottle or breast?",
            ],
        ],
    ),
    (
        4,
        [
            &[
                "Does your baby roll from tummy to back?",
                "Does your baby reach for a toy with one hand?",
                "Does your baby bear weight on their legs when supported?",
                "Does your baby grasp and shake a rattle?",
                "Does your baby pass an object from hand to hand?",
            ],
            &[
                "Does your baby look for the source of a sound?",
                "Does your baby explore objects with their mouth?",
                "Does your baby notice when a toy drops out of view?",
            ],
            &[
                "Does your baby babble strings of consonant sounds?",
                "Does your baby respond to their own name?",
                "Does your baby show excitement when a familiar routine starts?",
                "Does your baby protest when a toy is taken away?",
            ],
            &[
                "Does your baby show interest when others eat?",
                "Does your baby open their mouth when a spoon approaches?",
                "Does your baby keep their head steady in a high chair?",
            ],
        ],
    ),
    (
        5,
        [
            &[
                "Does your baby sit with support?",
                "Does your baby roll from back to tummy?",
                "Does your baby rake small objects toward themselves?",
                "Does your baby rock on hands and knees?",
            ],
            &[
                "Does your baby recognise that objects are at different distances?",
                "Does your baby show surprise when something unexpected happens?",
                "Does your baby enjoy peek-a-boo?",
            ],
            &[
                "Does your baby use their voice to express joy and displeasure?",
                "Does your baby show caution with strangers?",
                "Does your baby look at an object you point to?",
                "Does your baby babble with rising and falling tones?",
            ],
            &[
                "Does your baby swallow smooth purees without pushing them out?",
                "Does your baby sip from an open or free-flow cup with help?",
                "Does your baby turn away when full?",
            ],
        ],
    ),
    (
        6,
        [
            &[
                "Does your baby sit steadily without support?",
                "Does your baby crawl or shuffle to get a toy?",
                "Does your baby pick up small items with thumb and finger?",
                "Does your baby pull up to stand holding furniture?",
                "Does your baby bang two objects together?",
            ],
            &[
                "Does your baby sort objects by look or feel while playing?",
                "Does your baby study small details of toys?",
                "Does your baby tolerate new textures in food?",
            ],
            &[
                "Does your baby understand the word 'no'?",
                "Does your baby copy simple sounds you make?",
                "Does your baby wave or clap when prompted?",
                "Does your baby look for a hidden toy?",
            ],
            &[
                "Does your baby eat mashed foods with soft lumps?",
                "Does your baby feed themselves finger foods?",
                "Does your baby chew with up-and-down jaw movements?",
            ],
        ],
    ),
    (
        7,
        [
            &[
                "Does your baby cruise along furniture?",
                "Does your baby stand alone for a moment?",
                "Does your baby put objects into a container?",
                "Does your baby climb onto low furniture or steps?",
            ],
            &[
                "Does your baby notice the order in which things happen?",
                "Does your baby explore how objects fit together?",
                "Does your baby react to music by moving?",
            ],
            &[
                "Does your baby say 'mama' or 'dada' with meaning?",
                "Does your baby follow a one-step instruction with a gesture?",
                "Does your baby point to things they want?",
                "Does your baby hand you a toy when asked?",
            ],
            &[
                "Does your baby eat chopped family foods?",
                "Does your baby hold their own cup?",
                "Does your baby show clear food preferences?",
            ],
        ],
    ),
    (
        8,
        [
            &[
                "Does your baby take several steps alone?",
                "Does your baby stoop to pick up a toy and stand again?",
                "Does your baby stack two blocks?",
                "Does your baby scribble with a crayon?",
            ],
            &[
                "Does your baby carry out a simple sequence such as putting a lid on a box?",
                "Does your baby notice when something is out of place?",
                "Does your baby enjoy messy play with sand or water?",
            ],
            &[
                "Does your baby use three or more words?",
                "Does your baby point to a body part when named?",
                "Does your baby bring you things to show you?",
                "Does your baby imitate everyday actions like sweeping?",
            ],
            &[
                "Does your baby use a spoon with some spilling?",
                "Does your baby drink from an open cup?",
                "Does your baby eat most of what the family eats?",
            ],
        ],
    ),
    (
        9,
        [
            &[
                "Does your toddler walk steadily?",
                "Does your toddler walk while pulling a toy?",
                "Does your toddler climb stairs with help?",
                "Does your toddler throw a ball?",
            ],
            &[
                "Does your toddler try different ways to reach a goal?",
                "Does your toddler recognise themselves in a mirror?",
                "Does your toddler notice differences between similar objects?",
            ],
            &[
                "Does your toddler use ten or more words?",
                "Does your toddler follow a two-step instruction?",
                "Does your toddler play simple pretend games?",
                "Does your toddler say 'no' to express their own will?",
            ],
            &[
                "Does your toddler feed themselves with a spoon?",
                "Does your toddler chew harder foods such as apple slices?",
                "Does your toddler sit at the table for a whole meal?",
            ],
        ],
    ),
    (
        10,
        [
            &[
                "Does your toddler run?",
                "Does your toddler kick a ball forward?",
                "Does your toddler stack four or more blocks?",
                "Does your toddler turn pages of a board book?",
            ],
            &[
                "Does your toddler sort shapes or colours?",
                "Does your toddler show awareness of what others can see?",
                "Does your toddler react strongly to changes in routine?",
            ],
            &[
                "Does your toddler combine two words?",
                "Does your toddler name familiar objects in pictures?",
                "Does your toddler show concern when someone is upset?",
                "Does your toddler ask for 'more' using words or signs?",
            ],
            &[
                "Does your toddler use a fork?",
                "Does your toddler drink from a cup without spilling much?",
                "Does your toddler tell you when they are hungry or full?",
            ],
        ],
    ),
];
